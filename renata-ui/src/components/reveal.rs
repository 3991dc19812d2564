//! Scroll Reveal
//!
//! Fades content up the first time it enters the viewport. Each wrapper
//! owns one `IntersectionObserver`, disconnected after the first hit or
//! when the wrapper is torn down.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Entrance delay for the item at `index` in a staggered list
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

pub fn reveal_class(shown: bool, extra: &str) -> String {
    let state = if shown { "reveal is-visible" } else { "reveal" };
    if extra.is_empty() {
        state.to_string()
    } else {
        format!("{} {}", state, extra)
    }
}

#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)]
    class: &'static str,
    #[prop(default = 0)]
    delay_ms: u32,
    /// Fraction of the element that must be visible
    #[prop(default = 0.3)]
    threshold: f64,
) -> impl IntoView {
    let node_ref = create_node_ref::<html::Div>();
    let (shown, set_shown) = create_signal(false);
    let observer: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));

    let observer_slot = Rc::clone(&observer);
    node_ref.on_load(move |el| {
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if visible {
                    set_shown.set(true);
                    obs.disconnect();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(obs) => {
                obs.observe(&el);
                *observer_slot.borrow_mut() = Some(obs);
            }
            Err(e) => {
                // Without observer support, show immediately
                web_sys::console::warn_1(&format!("IntersectionObserver unavailable: {:?}", e).into());
                set_shown.set(true);
            }
        }
        on_intersect.forget();
    });

    on_cleanup(move || {
        if let Some(obs) = observer.borrow_mut().take() {
            obs.disconnect();
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(shown.get(), class)
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}
