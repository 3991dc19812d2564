//! UI Components
//!
//! Reusable Leptos components for the page.

pub mod background;
pub mod contact;
pub mod fade_image;
pub mod footer;
pub mod head;
pub mod header;
pub mod icons;
pub mod layout;
pub mod loader;
pub mod reveal;
pub mod showcase;
pub mod subscribe;

pub use background::Background;
pub use contact::ContactForm;
pub use fade_image::FadeImage;
pub use footer::Footer;
pub use head::HeadLinks;
pub use header::Header;
pub use icons::{Icon, IconSvg};
pub use layout::{ButtonSize, ButtonVariant, Card, LogoMark, NavButton, Section, ValueChip};
pub use loader::PageLoader;
pub use reveal::Reveal;
pub use showcase::{GalleryGrid, PhotoShowcase};
pub use subscribe::SubscribeModal;
