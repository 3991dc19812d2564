//! Decorative page background: gradient, noise, and corner ornaments.

use leptos::*;

const NOISE: &str = "background-image: url(\"data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100' width='100' height='100'><filter id='n'><feTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='2'/></filter><rect width='100' height='100' filter='url(%23n)' opacity='0.5'/></svg>\"); background-size: 200px 200px";

#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none fixed inset-0 -z-10">
            <div
                class="absolute inset-0"
                style="background: radial-gradient(1200px 800px at 10% 0%, #FFFFFF 0%, #FAF8F5 40%, #F3EDE7 100%)"
            />
            <div class="absolute inset-0 opacity-[0.06] mix-blend-multiply" style=NOISE />
            <div class="absolute right-0 top-0 h-40 w-40 opacity-30">
                <Ornament rotated=false />
            </div>
            <div class="absolute left-0 bottom-0 h-40 w-40 opacity-30">
                <Ornament rotated=true />
            </div>
            <div class="absolute right-10 top-20 h-32 w-32 rounded-full bg-[#EFD8D0]/20 blur-2xl" />
            <div class="absolute left-10 bottom-20 h-32 w-32 rounded-full bg-[#EFD8D0]/20 blur-2xl" />
        </div>
    }
}

#[component]
fn Ornament(rotated: bool) -> impl IntoView {
    view! {
        <svg
            width="160"
            height="160"
            viewBox="0 0 160 160"
            class="text-[#D8B27E]"
            transform=rotated.then_some("rotate(180 80 80)")
        >
            <path
                d="M120 20 Q140 30, 140 50 Q140 70, 120 70 Q100 70, 100 50 Q100 30, 120 20"
                fill="none"
                stroke="currentColor"
                stroke-width="1"
                opacity="0.5"
            />
            <path
                d="M110 30 Q125 35, 125 45 Q125 55, 110 55 Q95 55, 95 45 Q95 35, 110 30"
                fill="none"
                stroke="currentColor"
                stroke-width="0.8"
                opacity="0.4"
            />
            <circle cx="120" cy="40" r="3" fill="currentColor" opacity="0.5" />
        </svg>
    }
}
