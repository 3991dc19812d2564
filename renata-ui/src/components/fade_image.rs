//! Fade-in Image
//!
//! Hidden until the image resource has loaded, then visible for good.

use leptos::*;

pub fn fade_class(loaded: bool, extra: &str) -> String {
    let opacity = if loaded { "opacity-100" } else { "opacity-0" };
    format!("transition-opacity duration-700 ease-out {} {}", opacity, extra)
        .trim_end()
        .to_string()
}

#[component]
pub fn FadeImage(
    #[prop(into)]
    src: String,
    #[prop(into)]
    alt: String,
    #[prop(optional)]
    class: &'static str,
    /// Defer loading until near the viewport
    #[prop(optional)]
    lazy: bool,
) -> impl IntoView {
    let (loaded, set_loaded) = create_signal(false);

    view! {
        <img
            src=src
            alt=alt
            loading=if lazy { "lazy" } else { "eager" }
            on:load=move |_| set_loaded.set(true)
            class=move || fade_class(loaded.get(), class)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_load() {
        let class = fade_class(false, "h-56 w-full");
        assert!(class.contains("opacity-0"));
        assert!(!class.contains("opacity-100"));
        assert!(class.ends_with("h-56 w-full"));
    }

    #[test]
    fn test_visible_after_load() {
        let class = fade_class(true, "");
        assert_eq!(class, "transition-opacity duration-700 ease-out opacity-100");
    }
}
