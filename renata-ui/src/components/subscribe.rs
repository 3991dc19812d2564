//! Subscribe Modal
//!
//! Offers the channel links after a delay unless previously dismissed.
//! While open, page scrolling is locked and Escape closes the prompt; both
//! are released as soon as it leaves the open state or unmounts.

use gloo_timers::callback::Timeout;
use leptos::*;

use super::fade_image::FadeImage;
use super::icons::{Icon, IconSvg};
use super::layout::{ButtonVariant, NavButton, DISPLAY};
use crate::content::copy::{
    SUBSCRIBE_BODY, SUBSCRIBE_CAPTION, SUBSCRIBE_LEAD, SUBSCRIBE_NOTE, SUBSCRIBE_TITLE,
};
use crate::content::photos::SUBSCRIBE_SRC;
use crate::content::{RUTUBE_URL, TELEGRAM_URL, VK_URL};
use crate::state::subscribe::SUBSCRIBE_DELAY_MS;
use crate::state::{BrowserStore, SubscribePrompt};

pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Sets `body { overflow: hidden }` and restores the previous value on drop
struct ScrollLock {
    body: Option<web_sys::HtmlElement>,
    previous: String,
}

impl ScrollLock {
    fn acquire() -> Self {
        let body = document().body();
        let previous = body
            .as_ref()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default();
        if let Some(b) = &body {
            set_overflow(b, "hidden");
        }
        Self { body, previous }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(b) = &self.body {
            set_overflow(b, &self.previous);
        }
    }
}

fn set_overflow(body: &web_sys::HtmlElement, value: &str) {
    if let Err(e) = body.style().set_property("overflow", value) {
        web_sys::console::warn_1(&format!("Failed to set body overflow: {:?}", e).into());
    }
}

#[component]
pub fn SubscribeModal(
    /// Delay from mount before the prompt is offered
    #[prop(default = SUBSCRIBE_DELAY_MS)]
    delay_ms: u32,
) -> impl IntoView {
    let prompt = create_rw_signal(SubscribePrompt::load(&BrowserStore));
    let open = create_memo(move |_| prompt.with(|p| p.is_open()));

    if prompt.with_untracked(|p| p.should_schedule()) {
        let offer = Timeout::new(delay_ms, move || {
            prompt.try_update(|p| p.on_delay_elapsed());
        });
        on_cleanup(move || drop(offer));
    }

    let close = move || {
        prompt.update(|p| {
            p.dismiss(&BrowserStore);
        });
    };

    create_effect(move |_| {
        if !open.get() {
            return;
        }
        let lock = ScrollLock::acquire();
        let escape = window_event_listener(ev::keydown, move |ev| {
            if is_escape(&ev.key()) {
                close();
            }
        });
        on_cleanup(move || {
            escape.remove();
            drop(lock);
        });
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center p-4 animate-fade-in"
                role="dialog"
                aria-modal="true"
            >
                <div
                    class="absolute inset-0 bg-[#1F0F08]/30 backdrop-blur-sm"
                    on:click=move |_| close()
                />
                <div class="relative z-10 flex w-full max-w-5xl flex-col gap-6 overflow-hidden rounded-[32px] border border-[#D8B27E]/40 bg-[#FAF8F5]/95 text-[#7C3E2E] shadow-[0_20px_80px_rgba(0,0,0,0.22)] md:flex-row animate-pop-in">
                    <button
                        aria-label="Закрыть окно подписки"
                        on:click=move |_| close()
                        class="absolute right-4 top-4 z-20 rounded-full bg-white/70 p-1.5 text-[#7C3E2E] shadow hover:bg-white"
                    >
                        <IconSvg icon=Icon::Close />
                    </button>

                    <div class="relative h-72 w-full overflow-hidden md:h-auto md:min-h-[70vh] md:w-1/2">
                        <FadeImage src=SUBSCRIBE_SRC alt="RENARUSSIA community" class="h-full w-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-t from-[#1F0F08]/45 via-transparent to-transparent" />
                        <p class="absolute bottom-4 left-4 text-xs uppercase tracking-[0.3em] text-white/80">
                            {SUBSCRIBE_CAPTION}
                        </p>
                    </div>

                    <div class="flex flex-1 flex-col justify-center gap-6 px-6 pb-8 pt-4 md:px-10">
                        <div class="flex items-center gap-3 text-[#7C3E2E]">
                            <div class="flex h-12 w-12 items-center justify-center rounded-2xl bg-[#D8B27E]/20">
                                <IconSvg icon=Icon::MessagesSquare class="h-6 w-6" />
                            </div>
                            <div>
                                <p class="text-lg font-semibold" style=DISPLAY>{SUBSCRIBE_TITLE}</p>
                                <p class="text-sm opacity-80">{SUBSCRIBE_LEAD}</p>
                            </div>
                        </div>
                        <p class="text-base leading-relaxed">{SUBSCRIBE_BODY}</p>
                        <p class="text-xs opacity-70">{SUBSCRIBE_NOTE}</p>
                        <div class="flex flex-col gap-3 text-center md:flex-row">
                            <NavButton
                                href=TELEGRAM_URL
                                label="Telegram"
                                variant=ButtonVariant::Filled
                                class="justify-center py-3 text-base"
                                external=true
                            />
                            <NavButton href=VK_URL label="VK" class="justify-center py-3 text-base" external=true />
                            <NavButton href=RUTUBE_URL label="RuTube" class="justify-center py-3 text-base" external=true />
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_keys() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
        assert!(!is_escape("escape"));
    }
}
