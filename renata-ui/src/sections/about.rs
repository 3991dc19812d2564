//! Biography and philosophy (`#about`).

use leptos::*;

use crate::components::layout::{Divider, DISPLAY, SERIF};
use crate::components::{Card, IconSvg, Section};
use crate::content::copy::{
    ABOUT, ABOUT_PATH_BODY, ABOUT_PATH_TITLE, ABOUT_ROLES, PHILOSOPHY_BADGES, PHILOSOPHY_BODY,
    PHILOSOPHY_TITLE,
};
use crate::content::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Section id=SectionId::About heading=ABOUT>
            <div class="grid gap-6 md:grid-cols-3">
                <Card class="md:col-span-2">
                    <h3 class="text-xl font-semibold" style=DISPLAY>{ABOUT_PATH_TITLE}</h3>
                    <p class="mt-3 leading-relaxed">{ABOUT_PATH_BODY}</p>
                    <div class="mt-4 rounded-xl border border-[#D8B27E]/40 bg-white/60 p-4">
                        <ul class="list-disc pl-5 leading-relaxed">
                            {ABOUT_ROLES.iter().map(|role| view! { <li>{*role}</li> }).collect_view()}
                        </ul>
                    </div>
                </Card>
                <Card>
                    <h3 class="text-xl font-semibold" style=DISPLAY>{PHILOSOPHY_TITLE}</h3>
                    <p class="mt-3 italic" style=SERIF>{PHILOSOPHY_BODY}</p>
                    <Divider />
                    <div class="mt-6 grid grid-cols-2 gap-3 text-sm" style=DISPLAY>
                        {PHILOSOPHY_BADGES.iter().map(|(icon, label)| view! {
                            <span class="inline-flex items-center gap-2">
                                <IconSvg icon=*icon />
                                {*label}
                            </span>
                        }).collect_view()}
                    </div>
                </Card>
            </div>
        </Section>
    }
}
