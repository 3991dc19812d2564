//! Inline SVG icons (stroke style, 24x24 grid).

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BookOpen,
    GraduationCap,
    FlaskConical,
    HeartHandshake,
    Sparkles,
    MessagesSquare,
    Video,
    Megaphone,
    Feather,
    Globe,
    ShieldCheck,
    ScrollText,
    Menu,
    Close,
}

impl Icon {
    /// Path data drawn with `stroke="currentColor"`
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::GraduationCap => &[
                "M22 10v6M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            Icon::FlaskConical => &[
                "M10 2v7.527a2 2 0 0 1-.211.896L4.72 20.55a1 1 0 0 0 .9 1.45h12.76a1 1 0 0 0 .9-1.45l-5.069-10.127A2 2 0 0 1 14 9.527V2",
                "M8.5 2h7",
                "M7 16h10",
            ],
            Icon::HeartHandshake => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
                "M12 5 9.04 7.96a2.17 2.17 0 0 0 0 3.08c.82.82 2.13.85 3 .07l2.07-1.9a2.82 2.82 0 0 1 3.79 0l2.96 2.66",
            ],
            Icon::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                "M20 3v4",
                "M22 5h-4",
            ],
            Icon::MessagesSquare => &[
                "M14 9a2 2 0 0 1-2 2H6l-4 4V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2z",
                "M18 9h2a2 2 0 0 1 2 2v11l-4-4h-6a2 2 0 0 1-2-2v-1",
            ],
            Icon::Video => &[
                "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5",
                "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Icon::Megaphone => &["m3 11 18-5v12L3 14v-3z", "M11.6 16.8a3 3 0 1 1-5.8-1.6"],
            Icon::Feather => &[
                "M12.67 19a2 2 0 0 0 1.416-.588l6.154-6.172a6 6 0 0 0-8.49-8.49L5.586 9.914A2 2 0 0 0 5 11.328V18a1 1 0 0 0 1 1z",
                "M16 8 2 22",
                "M17.5 15H9",
            ],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "m9 12 2 2 4-4",
            ],
            Icon::ScrollText => &[
                "M15 12h-5",
                "M15 8h-5",
                "M19 17V5a2 2 0 0 0-2-2H4",
                "M8 21h12a2 2 0 0 0 2-2v-1a1 1 0 0 0-1-1H11a1 1 0 0 0-1 1v1a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v2a1 1 0 0 0 1 1h3",
            ],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(default = "h-4 w-4")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
