//! Page Sections
//!
//! One view per [`SectionId`], rendered in [`SectionId::ALL`] order.

pub mod about;
pub mod hero;
pub mod info;

use leptos::*;

use crate::components::{Card, ContactForm, GalleryGrid, PhotoShowcase, Section};
use crate::content::copy::{self, card_section};
use crate::content::{SectionId, GALLERY_PHOTOS, HIGHLIGHT_PHOTOS};

pub use about::About;
pub use hero::Hero;
pub use info::{CardGrid, Renarussia};

/// Render the section anchored at `id`
pub fn render_section(id: SectionId) -> View {
    match id {
        SectionId::Home => view! { <Hero /> }.into_view(),
        SectionId::Highlights => view! {
            <Section id=id heading=copy::HIGHLIGHTS>
                <PhotoShowcase photos=HIGHLIGHT_PHOTOS />
            </Section>
        }
        .into_view(),
        SectionId::About => view! { <About /> }.into_view(),
        SectionId::Science
        | SectionId::School
        | SectionId::Ran
        | SectionId::Culture
        | SectionId::Media => match card_section(id) {
            Some(section) => view! { <CardGrid section=section /> }.into_view(),
            None => ().into_view(),
        },
        SectionId::Renarussia => view! { <Renarussia /> }.into_view(),
        SectionId::Gallery => view! {
            <Section id=id heading=copy::GALLERY>
                <GalleryGrid photos=GALLERY_PHOTOS />
            </Section>
        }
        .into_view(),
        SectionId::Contact => view! {
            <Section id=id heading=copy::CONTACT>
                <Card>
                    <ContactForm />
                </Card>
            </Section>
        }
        .into_view(),
    }
}
