//! Photo lists for the highlights showcase and the gallery.

/// A photo with its caption
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Photo {
    pub src: &'static str,
    pub caption: &'static str,
}

const fn photo(src: &'static str, caption: &'static str) -> Photo {
    Photo { src, caption }
}

/// Logo shown in the header and footer
pub const LOGO_SRC: &str = "/photos/logo.png";

/// Portrait used by the hero card
pub const HERO_SRC: &str = "/photos/hero.webp";

/// Image on the left half of the subscribe prompt
pub const SUBSCRIBE_SRC: &str = "/photos/photo5.webp";

/// Curated subset shown right after the hero
pub const HIGHLIGHT_PHOTOS: &[Photo] = &[
    photo("/photos/hero.webp", "Лекции и встречи для молодёжи РАН"),
    photo("/photos/photo1.webp", "Экспедиция «Путь в науку»"),
    photo("/photos/photo3.webp", "Интеллектуальные практики для школьников"),
    photo("/photos/photo7.webp", "Дискуссии с наставниками"),
    photo("/photos/photo10.webp", "Торжественные церемонии и награды"),
    photo("/photos/photo13.webp", "Медиа сопровождение и эфиры"),
];

/// Full photo archive
pub const GALLERY_PHOTOS: &[Photo] = &[
    photo("/photos/hero.webp", "Портрет"),
    photo("/photos/photo1.webp", "Научный форум"),
    photo("/photos/photo2.webp", "Образовательный проект"),
    photo("/photos/photo3.webp", "Выступление"),
    photo("/photos/photo4.webp", "Общение с участниками"),
    photo("/photos/photo5.webp", "Культурная встреча"),
    photo("/photos/photo6.webp", "Совместный проект"),
    photo("/photos/photo7.webp", "Организация событий"),
    photo("/photos/photo8.webp", "Наставничество"),
    photo("/photos/photo9.webp", "Работа с молодежью"),
    photo("/photos/photo10.webp", "Командная работа"),
    photo("/photos/photo11.webp", "Встречи в институтах"),
    photo("/photos/photo12.webp", "Работа с тьюторским составом"),
    photo("/photos/photo13.webp", "Экспертная сессия"),
    photo("/photos/photo14.webp", "СМИ и интервью"),
    photo("/photos/school.webp", "Школа «RUSSIA»"),
];
