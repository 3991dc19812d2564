//! Header Navigation
//!
//! Sticky header with the logo, desktop navigation, and a mobile menu.
//! Any navigation click closes the mobile menu.

use leptos::*;

use super::icons::{Icon, IconSvg};
use super::layout::{ButtonSize, ButtonVariant, LogoMark, NavButton};
use crate::content::nav::CONTACT_CTA;
use crate::content::{SectionId, NAV_ITEMS};
use crate::state::PageState;

#[component]
pub fn Header() -> impl IntoView {
    let page = use_context::<PageState>().expect("PageState not found");

    view! {
        <header class="sticky top-0 z-40 border-b border-[#D8B27E]/40 backdrop-blur bg-[#FAF8F5]/80 relative">
            <div class="mx-auto flex w-full max-w-6xl items-center justify-between px-4 py-3">
                <a href=SectionId::Home.href() on:click=move |_| page.close_menu() class="flex items-center">
                    <LogoMark />
                </a>

                // Desktop navigation
                <nav class="hidden gap-4 md:flex flex-wrap">
                    {NAV_ITEMS.iter().map(|item| view! {
                        <NavButton
                            href=item.target.href()
                            label=item.label
                            on_click=move |_| page.close_menu()
                        />
                    }).collect_view()}
                </nav>

                <div class="flex items-center gap-3">
                    <div class="hidden md:inline-block">
                        <NavButton
                            href=SectionId::Contact.href()
                            label=CONTACT_CTA
                            variant=ButtonVariant::Filled
                            on_click=move |_| page.close_menu()
                        />
                    </div>
                    <button
                        on:click=move |_| page.toggle_menu()
                        class="md:hidden p-2 rounded-lg hover:bg-[#EFD8D0]/30 transition-colors"
                        aria-label="Меню"
                        aria-expanded=move || page.menu_open.get().to_string()
                    >
                        {move || if page.menu_open.get() {
                            view! { <IconSvg icon=Icon::Close class="h-7 w-7 text-[#7C3E2E]" /> }.into_view()
                        } else {
                            view! { <IconSvg icon=Icon::Menu class="h-6 w-6 text-[#7C3E2E]" /> }.into_view()
                        }}
                    </button>
                </div>
            </div>

            <MobileMenu />
        </header>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let page = use_context::<PageState>().expect("PageState not found");

    view! {
        <Show when=move || page.menu_open.get()>
            <div class="md:hidden absolute left-0 right-0 top-full flex justify-center px-3 pb-4 animate-fade-in">
                <nav class="w-full max-w-[260px] rounded-3xl border border-[#D8B27E]/40 bg-[#FAF8F5]/95 p-3 shadow-[0_12px_40px_rgba(0,0,0,0.1)] text-xs">
                    <div class="grid gap-2">
                        {NAV_ITEMS.iter().map(|item| view! {
                            <NavButton
                                href=item.target.href()
                                label=item.label
                                on_click=move |_| page.close_menu()
                                class="w-full justify-center"
                                size=ButtonSize::Compact
                            />
                        }).collect_view()}
                    </div>
                    <div class="mt-3">
                        <NavButton
                            href=SectionId::Contact.href()
                            label=CONTACT_CTA
                            variant=ButtonVariant::Filled
                            on_click=move |_| page.close_menu()
                            class="w-full justify-center"
                            size=ButtonSize::Compact
                        />
                    </div>
                </nav>
            </div>
        </Show>
    }
}
