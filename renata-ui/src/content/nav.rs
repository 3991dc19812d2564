//! Navigation entries for the header, mobile menu, and footer.

use super::SectionId;

/// A navigation entry: display label and target section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

const fn item(label: &'static str, target: SectionId) -> NavItem {
    NavItem { label, target }
}

/// Header and mobile menu entries
pub const NAV_ITEMS: &[NavItem] = &[
    item("Обо мне", SectionId::About),
    item("Наука и образование", SectionId::Science),
    item("Школа RUSSIA", SectionId::School),
    item("Путь в науку РАН", SectionId::Ran),
    item("Культура и женственность", SectionId::Culture),
    item("Медиа", SectionId::Media),
    item("@RENARUSSIA", SectionId::Renarussia),
    item("Фото", SectionId::Gallery),
    item("Обратная связь", SectionId::Contact),
];

/// Short footer links
pub const FOOTER_LINKS: &[NavItem] = &[
    item("Обо мне", SectionId::About),
    item("Наука", SectionId::Science),
    item("Школа", SectionId::School),
    item("РАН", SectionId::Ran),
    item("Культура", SectionId::Culture),
    item("Медиа", SectionId::Media),
    item("Контакты", SectionId::Contact),
];

/// Call-to-action label shown next to the navigation
pub const CONTACT_CTA: &str = "Связаться";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_anchors_are_distinct() {
        let targets: HashSet<_> = NAV_ITEMS.iter().map(|i| i.target).collect();
        assert_eq!(targets.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_nav_never_targets_home() {
        assert!(NAV_ITEMS.iter().all(|i| i.target != SectionId::Home));
    }
}
