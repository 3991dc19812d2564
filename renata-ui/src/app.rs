//! App Root Component
//!
//! Owns the page state, installs head links, and renders every section in
//! anchor order between the header and footer.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::layout::BODY;
use crate::components::{Background, Footer, HeadLinks, Header, PageLoader, SubscribeModal};
use crate::content::SectionId;
use crate::sections::render_section;
use crate::state::page::READY_FALLBACK_MS;
use crate::state::{provide_page_state, PageState};

pub fn content_class(ready: bool) -> &'static str {
    if ready {
        "min-h-screen text-[#444444] transition-all duration-700 opacity-100 translate-y-0 blur-0"
    } else {
        "min-h-screen text-[#444444] transition-all duration-700 opacity-0 translate-y-4 blur-sm pointer-events-none"
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let page = provide_page_state();
    watch_document_ready(page);

    view! {
        <PageLoader loading=page.loading fading=page.content_ready />
        <div class=move || content_class(page.content_ready.get()) style=format!("{}; scroll-behavior: smooth", BODY)>
            <HeadLinks />
            <Background />
            <Header />
            <main>
                {SectionId::ALL.into_iter().map(render_section).collect_view()}
            </main>
            <Footer />
        </div>
        <SubscribeModal />
    }
}

/// Mark the page ready on the document `load` event or after the fallback
/// timeout, whichever comes first.
fn watch_document_ready(page: PageState) {
    if document().ready_state() == "complete" {
        page.mark_ready();
    }

    let on_load = window_event_listener(ev::load, move |_| page.mark_ready());
    let fallback = Timeout::new(READY_FALLBACK_MS, move || page.mark_ready());

    on_cleanup(move || {
        on_load.remove();
        drop(fallback);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hidden_until_ready() {
        assert!(content_class(false).contains("opacity-0"));
        assert!(content_class(false).contains("pointer-events-none"));
        assert!(content_class(true).contains("opacity-100"));
    }
}
