//! Page copy: hero, biography, card sections, prompts, and footer text.

use super::SectionId;
use crate::components::icons::Icon;

/// Title and subtitle rendered at the top of a section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// One card inside a card section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfoCard {
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub body: &'static str,
}

/// A section made of a heading and a grid of cards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSection {
    pub id: SectionId,
    pub heading: SectionHeading,
    /// Grid columns on wide screens
    pub columns: u8,
    pub cards: &'static [InfoCard],
}

impl CardSection {
    pub fn grid_class(&self) -> &'static str {
        match self.columns {
            2 => "grid gap-6 md:grid-cols-2",
            _ => "grid gap-6 md:grid-cols-3",
        }
    }
}

/// Look up the card section rendered under `id`
pub fn card_section(id: SectionId) -> Option<&'static CardSection> {
    CARD_SECTIONS.iter().find(|s| s.id == id)
}

const fn heading(title: &'static str, subtitle: &'static str) -> SectionHeading {
    SectionHeading { title, subtitle }
}

const fn card(icon: Option<Icon>, title: &'static str, body: &'static str) -> InfoCard {
    InfoCard { icon, title, body }
}

// ---------- Hero ----------

pub const HERO_NAME: &str = "Рената Юнировна Давыдова";

pub const HERO_LEAD: &str = "Общественный деятель, учёный, популяризатор науки и организатор \
междисциплинарных проектов в сфере образования, культуры и патриотического воспитания молодёжи.";

pub const HERO_MISSION: &str = "Моя миссия — напомнить, что женственность, культура и наука не \
противоположны, а дополняют друг друга, создавая новое качество жизни и мышления.";

pub const HERO_QUOTE: &str = "«Свет знания зажигается там, где встречаются разум, сердце и дух. \
Моя цель — соединять науку и культуру, чтобы воспитывать новое поколение созидателей».";

pub const HERO_MORE: &str = "Узнать больше";
pub const HERO_JOIN: &str = "Присоединиться к проектам";

pub const VALUES: &[&str] = &[
    "Развитие",
    "Ответственность",
    "Культура",
    "Знание",
    "Любовь к Родине",
];

pub const HERO_BADGES: &[(Icon, &str)] = &[
    (Icon::ShieldCheck, "Лидер новых инициатив"),
    (Icon::FlaskConical, "Молодой учёный"),
    (Icon::GraduationCap, "Наставник молодёжи"),
];

// ---------- Highlights ----------

pub const HIGHLIGHTS: SectionHeading = heading(
    "Живые моменты",
    "Реальные кадры проектов Ренаты Давыдовой — от лекций РАН до культурных резиденций.",
);

// ---------- About ----------

pub const ABOUT: SectionHeading = heading(
    "Обо мне",
    "Биография, образование, общественная и научная деятельность",
);

pub const ABOUT_PATH_TITLE: &str = "Личность и путь";

pub const ABOUT_PATH_BODY: &str = "Рената Давыдова — общественный деятель, исследователь и \
популяризатор науки, автор уникальных методик патриотических детско-юношеских программ воспитания \
и образовательных проектов, формирующих духовно-нравственные ориентиры в обществе.";

pub const ABOUT_ROLES: &[&str] = &[
    "Руководитель Молодёжной секции Комиссии РАН по изучению научного наследия выдающихся учёных.",
    "Создатель и руководитель проекта «Путь в науку» РАН — популяризация науки среди молодёжи и поддержка молодых учёных России.",
    "Основатель патриотической детско-юношеской школы «RUSSIA», где воспитываются ценности гражданственности, уважения к традициям и любви к Родине.",
    "Модератор научных и образовательных мероприятий, форумов и конференций РАН.",
    "Организатор Международной Молодёжной Лаборатории Будущего — объединение потенциала молодёжи, науки и образования.",
    "Участник культурных и образовательных инициатив, связанных с развитием женского образования, просвещения и благотворительности.",
];

pub const PHILOSOPHY_TITLE: &str = "Философия";

pub const PHILOSOPHY_BODY: &str = "Женственность, культура и наука не противоположны — они \
дополняют друг друга, раскрывая внутреннюю силу личности и создавая новое качество мышления.";

pub const PHILOSOPHY_BADGES: &[(Icon, &str)] = &[
    (Icon::Sparkles, "Свет"),
    (Icon::Feather, "Женственность"),
    (Icon::ScrollText, "Достоинство"),
    (Icon::HeartHandshake, "Гармония"),
];

// ---------- Card sections ----------

pub const CARD_SECTIONS: &[CardSection] = &[
    CardSection {
        id: SectionId::Science,
        heading: heading("Наука и образование", "Исследования, участие в РАН, публикации"),
        columns: 3,
        cards: &[
            card(
                Some(Icon::FlaskConical),
                "Исследования",
                "Междисциплинарные направления, соединяющие гуманитарные и естественно-научные подходы, ориентированные на воспитание и развитие молодёжи.",
            ),
            card(
                Some(Icon::GraduationCap),
                "Российская академия наук",
                "Руководство молодёжной секцией, организация форумов и конференций, популяризация научного наследия выдающихся учёных.",
            ),
            card(
                Some(Icon::BookOpen),
                "Публикации",
                "Научные и просветительские статьи, методические материалы и программы воспитания. (Здесь можно разместить ссылки на публикации.)",
            ),
        ],
    },
    CardSection {
        id: SectionId::School,
        heading: heading(
            "Школа «RUSSIA»",
            "Патриотическое воспитание молодёжи: программы, фото и видео",
        ),
        columns: 3,
        cards: &[
            card(
                None,
                "Программы",
                "Образовательные модули, клубы и наставничество, формирующие ценности гражданственности, уважения к традициям и любви к Родине.",
            ),
            card(
                None,
                "Мастерские и проекты",
                "Командные исследования, волонтёрские инициативы, творческие и научные лаборатории, межрегиональные обмены.",
            ),
            card(
                None,
                "Медиа-галерея",
                "Фото и видео мероприятий, вдохновляющие истории участников. (Здесь можно встроить альбом или плейлист.)",
            ),
        ],
    },
    CardSection {
        id: SectionId::Ran,
        heading: heading(
            "Проект «Путь в науку» РАН",
            "История проекта, партнёры, возможности для молодёжи",
        ),
        columns: 2,
        cards: &[
            card(
                None,
                "О проекте",
                "«Путь в науку» — инициатива, открывающая молодёжи практические шаги к исследовательской деятельности: лекции, стажировки, конкурсы и совместные лаборатории с учёными.",
            ),
            card(
                None,
                "Партнёры",
                "Российская академия наук, научные институты, образовательные организации, культурные центры и благотворительные фонды. (Список партнёров и логотипы.)",
            ),
        ],
    },
    CardSection {
        id: SectionId::Culture,
        heading: heading(
            "Культура и женственность",
            "Проекты для женщин, просвещение, благотворительность. Здесь же — мои книги.",
        ),
        columns: 3,
        cards: &[
            card(
                None,
                "Просветительские циклы",
                "Встречи, лекции и дискуссии о гармонии внутреннего мира, лидерстве и семейных ценностях.",
            ),
            card(
                None,
                "Благотворительные инициативы",
                "Поддержка проектов для девочек и молодых женщин, развитие культурных практик и наставничество.",
            ),
            card(
                None,
                "Книги",
                "Отдельная страница с аннотациями и возможностью скачать/заказать. (Кнопки и карточки книг появятся, когда будут данные.)",
            ),
        ],
    },
    CardSection {
        id: SectionId::Media,
        heading: heading(
            "Медиа",
            "Выступления, интервью, пресс-материалы, RuTube и соцсети",
        ),
        columns: 3,
        cards: &[
            card(
                Some(Icon::Video),
                "Выступления",
                "Подборка лекций и докладов. (Добавим ссылки/видео.)",
            ),
            card(
                Some(Icon::Megaphone),
                "Интервью и пресса",
                "Интервью и публикации в СМИ с цитатами и материалами для прессы.",
            ),
            card(
                Some(Icon::Globe),
                "Социальные сети",
                "Ссылки на официальные каналы: RuTube, VK, Telegram и др. (Подставим реальные ссылки.)",
            ),
        ],
    },
];

// ---------- @RENARUSSIA ----------

pub const RENARUSSIA: SectionHeading = heading(
    "@RENARUSSIA",
    "Интеллектуально-культурное патриотическое объединение",
);

pub const RENARUSSIA_BODY: &str = "RENARUSSIA — это пространство, где наука, духовность и культура \
соединяются в созидательную силу развития. Проект вдохновляет молодёжь к познанию, женщину — к \
раскрытию внутренней силы, а общество — к осознанию своей идентичности и родовой преемственности, \
где знания и ценности становятся опорой личности, семьи и страны.";

pub const RENARUSSIA_LINK: &str = "Перейти в Telegram-канал";

// ---------- Gallery / Contact ----------

pub const GALLERY: SectionHeading = heading(
    "Фотоархив",
    "Свежие кадры с мероприятий, лекций и встреч",
);

pub const CONTACT: SectionHeading = heading(
    "Обратная связь",
    "Оставьте контакты и вопрос — и получите приглашение к участию в проектах",
);

pub const CONTACT_CONSENT: &str =
    "Нажимая «Отправить», вы соглашаетесь с обработкой персональных данных.";

pub const CONTACT_ACK: &str = "Спасибо! Ваша заявка отправлена. Мы свяжемся с вами по email.";

// ---------- Loader / prompt / footer ----------

pub const LOADER_TEXT: &str = "Загружаем вдохновение";

pub const LOGO_NAME: &str = "Renata Davydova";
pub const LOGO_TAGLINE: &str = "наука · культура · воспитание";

pub const SUBSCRIBE_TITLE: &str = "Будем на связи?";
pub const SUBSCRIBE_LEAD: &str = "Telegram, VK и RuTube — инсайты науки и культуры прямо у вас.";
pub const SUBSCRIBE_BODY: &str = "Подпишитесь, чтобы первыми узнавать о проектах, лекциях и \
вдохновляющих историях женского лидерства. Культура, женственность и наука — в одном канале.";
pub const SUBSCRIBE_NOTE: &str = "Всегда можно закрыть — мы ценим ваше спокойствие.";
pub const SUBSCRIBE_CAPTION: &str = "RENARUSSIA · COMMUNITY";

pub const FOOTER_TAGLINE: &str = "Сделано с любовью к науке, культуре и России.";

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("© {} Renata Davydova. Все права защищены.", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_section_lookup() {
        let ran = card_section(SectionId::Ran).unwrap();
        assert_eq!(ran.cards.len(), 2);
        assert_eq!(ran.grid_class(), "grid gap-6 md:grid-cols-2");
        assert!(card_section(SectionId::Gallery).is_none());
    }

    #[test]
    fn test_card_section_ids_are_unique() {
        for (i, a) in CARD_SECTIONS.iter().enumerate() {
            assert!(CARD_SECTIONS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2025), "© 2025 Renata Davydova. Все права защищены.");
    }
}
