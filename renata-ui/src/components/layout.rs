//! Layout Primitives
//!
//! Section wrapper, cards, pill buttons, value chips, and the logo mark.

use leptos::*;

use super::reveal::Reveal;
use crate::content::copy::{SectionHeading, LOGO_NAME, LOGO_TAGLINE};
use crate::content::photos::LOGO_SRC;
use crate::content::SectionId;

pub const SERIF: &str = "font-family: 'Playfair Display', serif";
pub const DISPLAY: &str = "font-family: 'Raleway', sans-serif";
pub const BODY: &str = "font-family: 'Open Sans', sans-serif";

/// Anchored page section with an optional heading
#[component]
pub fn Section(
    id: SectionId,
    #[prop(optional)]
    heading: Option<SectionHeading>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id.as_str() class="scroll-mt-24 py-12 md:py-24">
            <div class="mx-auto w-full max-w-6xl px-4 sm:px-6">
                <Reveal>
                    {heading.map(|h| view! {
                        <header class="mb-8 md:mb-12">
                            <h2
                                class="text-3xl md:text-4xl font-semibold tracking-tight text-[#444444] italic"
                                style=SERIF
                            >
                                {h.title}
                            </h2>
                            <p
                                class="mt-3 max-w-3xl text-base md:text-lg leading-relaxed text-[#444444]"
                                style=BODY
                            >
                                {h.subtitle}
                            </p>
                            <Divider />
                        </header>
                    })}
                    {children()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Divider() -> impl IntoView {
    view! {
        <div class="mt-6 h-px bg-gradient-to-r from-[#D8B27E]/0 via-[#D8B27E] to-[#D8B27E]/0" />
    }
}

#[component]
pub fn Card(
    children: Children,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-2xl border border-[#D8B27E]/50 bg-[#F3EDE7] p-6 \
             shadow-[0_6px_24px_rgba(0,0,0,0.06)] transition-all duration-200 \
             hover:-translate-y-0.5 hover:shadow-[0_8px_32px_rgba(0,0,0,0.08)] {}",
            class
        )>
            {children()}
        </div>
    }
}

#[component]
pub fn ValueChip(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="mr-2 mb-2 inline-block rounded-full border border-[#D8B27E] bg-[#EFD8D0]/30 px-3 py-1 text-sm text-[#7C3E2E] shadow-sm">
            {label}
        </span>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Ghost,
    Filled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Compact,
    #[default]
    Default,
    Large,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let size = match size {
        ButtonSize::Compact => "px-3 py-1.5 text-xs",
        ButtonSize::Default => "px-4 py-2 text-sm",
        ButtonSize::Large => "px-5 py-2 text-base",
    };
    let variant = match variant {
        ButtonVariant::Ghost => {
            "border border-[#D8B27E]/40 bg-white/80 text-[#7C3E2E] \
             shadow-[0_6px_18px_rgba(124,62,46,0.18)] hover:bg-[#FAF8F5] \
             hover:shadow-[0_12px_28px_rgba(124,62,46,0.2)]"
        }
        ButtonVariant::Filled => {
            "border border-[#D8B27E] bg-[#D8B27E] text-[#FAF8F5] \
             shadow-[0_8px_20px_rgba(216,178,126,0.4)] hover:bg-[#c49a62] \
             hover:shadow-[0_14px_30px_rgba(124,62,46,0.3)]"
        }
    };
    format!(
        "relative inline-flex items-center justify-center rounded-full font-semibold \
         transition-all hover:-translate-y-0.5 {} {} {}",
        size, variant, extra
    )
    .trim_end()
    .to_string()
}

/// Pill link used for navigation and outbound channels
#[component]
pub fn NavButton(
    #[prop(into)]
    href: String,
    #[prop(into)]
    label: String,
    #[prop(optional, into)]
    on_click: Option<Callback<web_sys::MouseEvent>>,
    #[prop(optional)]
    class: &'static str,
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional)]
    size: ButtonSize,
    /// Open in a new tab
    #[prop(optional)]
    external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.call(ev);
                }
            }
            class=button_class(variant, size, class)
            style=DISPLAY
        >
            <span class="relative z-10">{label}</span>
            <span class="pointer-events-none absolute inset-0 rounded-full bg-gradient-to-b from-transparent via-transparent to-black/10 opacity-70" />
        </a>
    }
}

#[component]
pub fn LogoMark() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="relative">
                <div class="flex h-14 w-14 items-center justify-center rounded-[18px] bg-white/90 shadow-[0_12px_30px_rgba(0,0,0,0.12)]">
                    <img src=LOGO_SRC alt=LOGO_NAME class="h-10 w-10 object-contain" loading="lazy" />
                </div>
                <div class="absolute -right-1 -top-1 flex h-5 w-5 items-center justify-center rounded-full bg-[#D8B27E] text-[10px] font-semibold text-white shadow">
                    "✷"
                </div>
            </div>
            <div class="hidden h-10 w-px bg-gradient-to-b from-transparent via-[#D8B27E]/70 to-transparent md:block" />
            <div class="leading-tight">
                <div class="text-base font-semibold tracking-wide text-[#444444]" style=DISPLAY>
                    {LOGO_NAME}
                </div>
                <div class="text-xs italic text-[#7C3E2E]/80" style=SERIF>
                    {LOGO_TAGLINE}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_sizes() {
        let compact = button_class(ButtonVariant::Ghost, ButtonSize::Compact, "");
        assert!(compact.contains("px-3 py-1.5 text-xs"));
        let large = button_class(ButtonVariant::Ghost, ButtonSize::Large, "");
        assert!(large.contains("px-5 py-2 text-base"));
    }

    #[test]
    fn test_filled_variant() {
        let class = button_class(ButtonVariant::Filled, ButtonSize::Default, "w-full");
        assert!(class.contains("bg-[#D8B27E]"));
        assert!(!class.contains("bg-white/80"));
        assert!(class.ends_with("w-full"));
    }
}
