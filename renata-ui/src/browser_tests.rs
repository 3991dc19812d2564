//! In-browser checks, run with `wasm-pack test --headless --firefox`.
//!
//! Tests share one document, so each mounts into its own container and
//! queries only inside it. Views that schedule timers are mounted behind a
//! `Show` so they can be torn down before the next test.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use crate::app::App;
use crate::components::{ContactForm, FadeImage, HeadLinks, SubscribeModal};
use crate::content::{SectionId, GALLERY_PHOTOS};
use crate::state::storage::{DISMISSED_KEY, DISMISSED_SENTINEL};
use crate::state::{BrowserStore, DismissalStore};

wasm_bindgen_test_configure!(run_in_browser);

const CLOSE_LABEL: &str = "Закрыть окно подписки";

fn container() -> web_sys::HtmlElement {
    let el = document()
        .create_element("div")
        .expect("create container")
        .unchecked_into::<web_sys::HtmlElement>();
    document()
        .body()
        .expect("body")
        .append_child(&el)
        .expect("attach container");
    el
}

/// Mount `f` inside a `Show`; setting the returned signal to `false`
/// disposes everything it created.
fn mount_removable<F, N>(root: &web_sys::HtmlElement, f: F) -> RwSignal<bool>
where
    F: Fn() -> N + 'static,
    N: IntoView + 'static,
{
    let shown = create_rw_signal(true);
    mount_to(root.clone(), move || {
        view! { <Show when=move || shown.get()>{f()}</Show> }
    });
    shown
}

fn count(root: &web_sys::HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector)
        .map(|nodes| nodes.length())
        .unwrap_or(0)
}

fn find(root: &web_sys::HtmlElement, selector: &str) -> web_sys::HtmlElement {
    root.query_selector(selector)
        .ok()
        .flatten()
        .unwrap_or_else(|| panic!("no element for {}", selector))
        .unchecked_into::<web_sys::HtmlElement>()
}

async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn storage() -> web_sys::Storage {
    window().local_storage().ok().flatten().expect("localStorage")
}

fn stored_flag() -> Option<String> {
    storage().get_item(DISMISSED_KEY).ok().flatten()
}

fn body_overflow() -> String {
    document()
        .body()
        .expect("body")
        .style()
        .get_property_value("overflow")
        .unwrap_or_default()
}

fn set_body_overflow(value: &str) {
    document()
        .body()
        .expect("body")
        .style()
        .set_property("overflow", value)
        .expect("set overflow");
}

fn press_escape() {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    window().dispatch_event(&event).expect("dispatch keydown");
}

fn type_into(root: &web_sys::HtmlElement, selector: &str, value: &str) {
    let el = find(root, selector);
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    }
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).expect("input event");
    el.dispatch_event(&event).expect("dispatch input");
}

#[wasm_bindgen_test]
fn every_section_anchor_renders_once() {
    let root = container();
    let shown = mount_removable(&root, || view! { <App /> });

    for id in SectionId::ALL {
        assert_eq!(
            count(&root, &format!("[id='{}']", id.as_str())),
            1,
            "anchor {}",
            id.as_str()
        );
    }
    shown.set(false);
}

#[wasm_bindgen_test]
fn gallery_renders_one_tile_per_photo() {
    let root = container();
    let shown = mount_removable(&root, || view! { <App /> });

    let tiles = count(&root, "#gallery img");
    assert_eq!(tiles as usize, GALLERY_PHOTOS.len());
    shown.set(false);
}

#[wasm_bindgen_test]
fn prompt_is_closed_on_mount() {
    let root = container();
    let shown = mount_removable(&root, || view! { <App /> });

    assert_eq!(count(&root, "[role='dialog']"), 0);
    shown.set(false);
}

#[wasm_bindgen_test]
async fn navigation_clicks_close_the_menu() {
    let root = container();
    let shown = mount_removable(&root, || view! { <App /> });

    // desktop nav only while closed, plus the mobile nav while open
    assert_eq!(count(&root, "header nav"), 1);

    find(&root, "button[aria-label='Меню']").click();
    sleep(10).await;
    assert_eq!(count(&root, "header nav"), 2);

    find(&root, "header nav a").click();
    sleep(10).await;
    assert_eq!(count(&root, "header nav"), 1);

    find(&root, "button[aria-label='Меню']").click();
    sleep(10).await;
    find(&root, "footer nav a").click();
    sleep(10).await;
    assert_eq!(count(&root, "header nav"), 1);

    shown.set(false);
}

#[wasm_bindgen_test]
fn head_links_are_removed_on_teardown() {
    let head = document().head().expect("head");
    let links_before = head.query_selector_all("link").map(|n| n.length()).unwrap_or(0);

    let root = container();
    let shown = mount_removable(&root, || view! { <HeadLinks /> });

    let links_mounted = head.query_selector_all("link").map(|n| n.length()).unwrap_or(0);
    assert_eq!(links_mounted, links_before + 4);
    assert_eq!(
        head.query_selector_all("link[rel='icon']").map(|n| n.length()).unwrap_or(0),
        1
    );

    shown.set(false);
    let links_after = head.query_selector_all("link").map(|n| n.length()).unwrap_or(0);
    assert_eq!(links_after, links_before);
}

#[wasm_bindgen_test]
fn fade_image_starts_hidden() {
    let root = container();
    mount_to(root.clone(), || view! { <FadeImage src="/missing.webp" alt="fade" /> });

    let img = find(&root, "img");
    assert!(img.class_name().contains("opacity-0"));
}

#[wasm_bindgen_test]
fn browser_store_persists_sentinel() {
    let _ = storage().remove_item(DISMISSED_KEY);

    let store = BrowserStore;
    assert!(!store.is_dismissed());
    store.mark_dismissed();
    assert!(store.is_dismissed());
    assert_eq!(stored_flag().as_deref(), Some(DISMISSED_SENTINEL));

    let _ = storage().remove_item(DISMISSED_KEY);
}

/// Mount a prompt with a short delay and wait for it to open
async fn open_prompt(root: &web_sys::HtmlElement) -> RwSignal<bool> {
    let _ = storage().remove_item(DISMISSED_KEY);
    set_body_overflow("scroll");

    let shown = mount_removable(root, || view! { <SubscribeModal delay_ms=10 /> });
    sleep(80).await;

    assert_eq!(count(root, "[role='dialog']"), 1);
    assert_eq!(body_overflow(), "hidden");
    shown
}

/// After any close path: gone, unlocked, persisted
async fn assert_dismissed(root: &web_sys::HtmlElement) {
    sleep(10).await;
    assert_eq!(count(root, "[role='dialog']"), 0);
    assert_eq!(body_overflow(), "scroll");
    assert_eq!(stored_flag().as_deref(), Some(DISMISSED_SENTINEL));

    set_body_overflow("");
    let _ = storage().remove_item(DISMISSED_KEY);
}

#[wasm_bindgen_test]
async fn escape_dismisses_prompt() {
    let root = container();
    let shown = open_prompt(&root).await;

    press_escape();
    assert_dismissed(&root).await;
    shown.set(false);
}

#[wasm_bindgen_test]
async fn close_button_dismisses_prompt() {
    let root = container();
    let shown = open_prompt(&root).await;

    find(&root, &format!("button[aria-label='{}']", CLOSE_LABEL)).click();
    assert_dismissed(&root).await;
    shown.set(false);
}

#[wasm_bindgen_test]
async fn backdrop_dismisses_prompt() {
    let root = container();
    let shown = open_prompt(&root).await;

    find(&root, "[role='dialog'] > div").click();
    assert_dismissed(&root).await;
    shown.set(false);
}

#[wasm_bindgen_test]
async fn unmount_while_open_releases_scroll_lock() {
    let root = container();
    let shown = open_prompt(&root).await;

    shown.set(false);
    sleep(10).await;
    assert_eq!(body_overflow(), "scroll");
    // closed by teardown, not by the visitor
    assert_eq!(stored_flag(), None);

    set_body_overflow("");
}

#[wasm_bindgen_test]
async fn prompt_waits_for_delay() {
    let _ = storage().remove_item(DISMISSED_KEY);
    let root = container();
    let shown = mount_removable(&root, || view! { <SubscribeModal delay_ms=300 /> });

    sleep(50).await;
    assert_eq!(count(&root, "[role='dialog']"), 0);

    sleep(400).await;
    assert_eq!(count(&root, "[role='dialog']"), 1);

    shown.set(false);
    set_body_overflow("");
}

#[wasm_bindgen_test]
async fn prompt_never_opens_when_previously_dismissed() {
    storage()
        .set_item(DISMISSED_KEY, DISMISSED_SENTINEL)
        .expect("set item");
    set_body_overflow("");
    let root = container();
    let shown = mount_removable(&root, || view! { <SubscribeModal delay_ms=10 /> });

    sleep(80).await;
    assert_eq!(count(&root, "[role='dialog']"), 0);
    assert_eq!(body_overflow(), "");

    shown.set(false);
    let _ = storage().remove_item(DISMISSED_KEY);
}

#[wasm_bindgen_test]
async fn contact_submit_shows_acknowledgement() {
    let root = container();
    mount_to(root.clone(), || view! { <ContactForm /> });

    // whitespace satisfies `required`, so the browser lets this through
    type_into(&root, "#name", "  ");
    type_into(&root, "#email", "anna@example.com");
    type_into(&root, "#message", "Хочу присоединиться");

    find(&root, "form")
        .unchecked_into::<web_sys::HtmlFormElement>()
        .request_submit()
        .expect("submit");
    sleep(10).await;

    assert_eq!(count(&root, "form"), 0);
    assert_eq!(count(&root, "[role='status']"), 1);
}
