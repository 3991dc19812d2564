//! Site Content
//!
//! Static display data: navigation, photos, and section copy.
//! Everything here is known at compile time and immutable for the session.

pub mod copy;
pub mod nav;
pub mod photos;

pub use copy::{CardSection, InfoCard, CARD_SECTIONS};
pub use nav::{NavItem, FOOTER_LINKS, NAV_ITEMS};
pub use photos::{Photo, GALLERY_PHOTOS, HIGHLIGHT_PHOTOS};

/// Document title installed on mount
pub const SITE_TITLE: &str = "Renata Davydova — Рената Ю. Давыдова";

/// Public Telegram channel
pub const TELEGRAM_URL: &str = "https://t.me/RENARUSSIA";
pub const VK_URL: &str = "https://vk.com";
pub const RUTUBE_URL: &str = "https://rutube.ru";

/// Every anchor rendered on the page.
///
/// The root view renders sections by walking [`SectionId::ALL`], so this
/// enum is the single source of rendered section ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Highlights,
    About,
    Science,
    School,
    Ran,
    Culture,
    Media,
    Renarussia,
    Gallery,
    Contact,
}

impl SectionId {
    /// Sections in render order
    pub const ALL: [SectionId; 11] = [
        SectionId::Home,
        SectionId::Highlights,
        SectionId::About,
        SectionId::Science,
        SectionId::School,
        SectionId::Ran,
        SectionId::Culture,
        SectionId::Media,
        SectionId::Renarussia,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Highlights => "highlights",
            SectionId::About => "about",
            SectionId::Science => "science",
            SectionId::School => "school",
            SectionId::Ran => "ran",
            SectionId::Culture => "culture",
            SectionId::Media => "media",
            SectionId::Renarussia => "renarussia",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    /// In-page link target, e.g. `#about`
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

/// Rendered section ids in document order
pub fn section_ids_in_render_order() -> Vec<&'static str> {
    SectionId::ALL.iter().map(|id| id.as_str()).collect()
}

/// True when every navigation and footer target is rendered exactly once.
pub fn nav_targets_resolve() -> bool {
    let rendered = section_ids_in_render_order();
    NAV_ITEMS
        .iter()
        .chain(FOOTER_LINKS.iter())
        .all(|item| {
            rendered
                .iter()
                .filter(|id| **id == item.target.as_str())
                .count()
                == 1
        })
}
