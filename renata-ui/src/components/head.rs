//! Head Installer
//!
//! Sets the document title and appends font and favicon links to
//! `<head>` for the lifetime of the root view.

use leptos::*;

use crate::content::SITE_TITLE;

pub const FONTS_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;600&family=Playfair+Display:ital,wght@0,400;0,600;1,400;1,600&family=Raleway:wght@400;600&display=swap";

const FAVICON_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'>\
<rect width='64' height='64' rx='12' fill='#D8B27E'/>\
<text x='18' y='41' font-size='28' font-family='Times, Playfair Display' fill='#FAF8F5' font-weight='600'>RD</text>\
</svg>";

/// A `<link>` element to install
#[derive(Debug, Clone, PartialEq)]
pub struct HeadLink {
    pub rel: &'static str,
    pub href: String,
    pub crossorigin: bool,
}

/// Generated "RD" monogram as a `data:` URI
pub fn favicon_data_uri() -> String {
    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(FAVICON_SVG))
}

/// Links installed on mount, in insertion order
pub fn head_links() -> Vec<HeadLink> {
    vec![
        HeadLink {
            rel: "preconnect",
            href: "https://fonts.googleapis.com".to_string(),
            crossorigin: false,
        },
        HeadLink {
            rel: "preconnect",
            href: "https://fonts.gstatic.com".to_string(),
            crossorigin: true,
        },
        HeadLink {
            rel: "stylesheet",
            href: FONTS_STYLESHEET.to_string(),
            crossorigin: false,
        },
        HeadLink {
            rel: "icon",
            href: favicon_data_uri(),
            crossorigin: false,
        },
    ]
}

fn install(
    document: &web_sys::Document,
    head: &web_sys::HtmlHeadElement,
    link: &HeadLink,
) -> Option<web_sys::Element> {
    let element = document.create_element("link").ok()?;
    element.set_attribute("rel", link.rel).ok()?;
    element.set_attribute("href", &link.href).ok()?;
    if link.crossorigin {
        element.set_attribute("crossorigin", "anonymous").ok()?;
    }
    head.append_child(&element).ok()?;
    Some(element)
}

/// Installs head links on mount and removes exactly those nodes on cleanup
#[component]
pub fn HeadLinks() -> impl IntoView {
    let document = document();
    document.set_title(SITE_TITLE);

    let installed: Vec<web_sys::Element> = match document.head() {
        Some(head) => head_links()
            .iter()
            .filter_map(|link| install(&document, &head, link))
            .collect(),
        None => Vec::new(),
    };

    on_cleanup(move || {
        for element in installed {
            element.remove();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_is_percent_encoded_once() {
        let uri = favicon_data_uri();
        assert!(uri.starts_with("data:image/svg+xml;utf8,%3Csvg"));
        assert!(uri.contains("%23D8B27E"));
        assert!(!uri.contains("%2523"));
    }

    #[test]
    fn test_link_set() {
        let links = head_links();
        let rels: Vec<_> = links.iter().map(|l| l.rel).collect();
        assert_eq!(rels, vec!["preconnect", "preconnect", "stylesheet", "icon"]);
        assert_eq!(links.iter().filter(|l| l.crossorigin).count(), 1);
    }
}
