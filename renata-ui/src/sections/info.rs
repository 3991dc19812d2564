//! Data-driven card sections and the @RENARUSSIA block.

use leptos::*;

use crate::components::layout::DISPLAY;
use crate::components::{Card, Icon, IconSvg, Section};
use crate::content::copy::{CardSection, RENARUSSIA, RENARUSSIA_BODY, RENARUSSIA_LINK};
use crate::content::{SectionId, TELEGRAM_URL};

#[component]
pub fn CardGrid(section: &'static CardSection) -> impl IntoView {
    view! {
        <Section id=section.id heading=section.heading>
            <div class=section.grid_class()>
                {section.cards.iter().map(|card| view! {
                    <Card>
                        <div class="flex items-center gap-3">
                            {card.icon.map(|icon| view! { <IconSvg icon=icon class="h-5 w-5" /> })}
                            <h4 class="font-semibold" style=DISPLAY>{card.title}</h4>
                        </div>
                        <p class="mt-2 text-sm leading-relaxed">{card.body}</p>
                    </Card>
                }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Renarussia() -> impl IntoView {
    view! {
        <Section id=SectionId::Renarussia heading=RENARUSSIA>
            <Card>
                <p class="leading-relaxed">{RENARUSSIA_BODY}</p>
                <a
                    href=TELEGRAM_URL
                    target="_blank"
                    rel="noreferrer"
                    class="mt-4 inline-flex items-center gap-2 rounded-full border border-[#D8B27E] bg-white/80 px-4 py-2 text-sm shadow hover:bg-[#EFD8D0]/30"
                >
                    <IconSvg icon=Icon::MessagesSquare />
                    {RENARUSSIA_LINK}
                </a>
            </Card>
        </Section>
    }
}
