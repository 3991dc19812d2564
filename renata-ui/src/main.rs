//! Renata Davydova
//!
//! Single-page personal site built with Leptos (WASM): biography, project
//! showcase, photo gallery, and a client-side contact form.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All content is static and compiled in; the only durable
//! state is the subscribe prompt's dismissal flag in `localStorage`.

use leptos::*;

mod app;
mod components;
mod content;
mod sections;
mod state;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
