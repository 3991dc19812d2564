//! Footer with short links and the copyright line.

use chrono::Datelike;
use leptos::*;

use super::layout::{LogoMark, DISPLAY};
use crate::content::copy::{copyright, FOOTER_TAGLINE};
use crate::content::FOOTER_LINKS;
use crate::state::PageState;

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_context::<PageState>().expect("PageState not found");
    // Fixed for the lifetime of the page
    let year = chrono::Local::now().year();

    view! {
        <footer class="border-t border-[#D8B27E]/40 bg-[#FAF8F5]/80">
            <div class="mx-auto w-full max-w-6xl px-4 py-10">
                <div class="flex flex-col items-start justify-between gap-6 md:flex-row md:items-center">
                    <LogoMark />
                    <nav class="flex flex-wrap gap-4 text-sm" style=DISPLAY>
                        {FOOTER_LINKS.iter().map(|link| view! {
                            <a
                                href=link.target.href()
                                on:click=move |_| page.close_menu()
                                class="hover:text-[#7C3E2E]"
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                    </nav>
                </div>
                <div class="mt-6 flex flex-col items-start justify-between gap-4 text-xs opacity-70 md:flex-row">
                    <div>{copyright(year)}</div>
                    <div>{FOOTER_TAGLINE}</div>
                </div>
            </div>
        </footer>
    }
}
