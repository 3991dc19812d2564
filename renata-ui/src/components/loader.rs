//! Page Loader
//!
//! Full-screen spinner shown until the page is ready. It starts fading as
//! soon as content is ready and leaves the DOM once `loading` drops.

use leptos::*;

use super::layout::DISPLAY;
use crate::content::copy::LOADER_TEXT;

pub fn loader_class(fading: bool) -> &'static str {
    if fading {
        "fixed inset-0 z-50 flex flex-col items-center justify-center bg-[#FAF8F5] \
         opacity-0 transition-opacity duration-500"
    } else {
        "fixed inset-0 z-50 flex flex-col items-center justify-center bg-[#FAF8F5] \
         opacity-100 transition-opacity duration-500"
    }
}

#[component]
pub fn PageLoader(
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    fading: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class=move || loader_class(fading.get()) role="status" aria-live="polite">
                <div class="flex h-28 w-28 items-center justify-center rounded-full border-2 border-[#D8B27E]/30 animate-[spin_4s_linear_infinite]">
                    <div class="h-16 w-16 rounded-full border-4 border-[#D8B27E]/40 border-t-[#7C3E2E] animate-[spin_2s_linear_infinite_reverse]" />
                </div>
                <p class="mt-6 text-sm uppercase tracking-[0.3em] text-[#7C3E2E] animate-pulse" style=DISPLAY>
                    {LOADER_TEXT}
                </p>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_fades() {
        assert!(loader_class(false).contains("opacity-100"));
        assert!(loader_class(true).contains("opacity-0"));
    }
}
