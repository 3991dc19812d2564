//! Hero section (`#home`).

use leptos::*;

use crate::components::layout::{DISPLAY, SERIF};
use crate::components::{Card, FadeImage, IconSvg, ValueChip};
use crate::content::copy::{
    HERO_BADGES, HERO_JOIN, HERO_LEAD, HERO_MISSION, HERO_MORE, HERO_NAME, HERO_QUOTE, VALUES,
};
use crate::content::photos::HERO_SRC;
use crate::content::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Home.as_str() class="relative">
            <div class="mx-auto grid w-full max-w-6xl grid-cols-1 items-center gap-10 px-4 py-12 md:grid-cols-2 md:py-20">
                <div class="text-center md:text-left animate-fade-up">
                    <h1 class="text-4xl leading-tight text-[#444444] md:text-5xl italic" style=SERIF>
                        {HERO_NAME}
                    </h1>
                    <p class="mt-4 text-base leading-relaxed md:text-lg">{HERO_LEAD}</p>
                    <p class="mt-6 text-[#7C3E2E] font-semibold" style=DISPLAY>{HERO_MISSION}</p>
                    <div class="mt-6 flex flex-wrap items-center justify-center gap-3 md:justify-start">
                        <a
                            href=SectionId::About.href()
                            class="rounded-full border border-[#D8B27E] bg-white/70 px-5 py-2 text-sm shadow hover:bg-[#EFD8D0]/30 transition-all hover:shadow-md"
                        >
                            {HERO_MORE}
                        </a>
                        <a
                            href=SectionId::Contact.href()
                            class="rounded-full bg-[#D8B27E] px-5 py-2 text-sm font-semibold text-[#FAF8F5] shadow hover:shadow-md transition-all active:scale-[0.98]"
                        >
                            {HERO_JOIN}
                        </a>
                    </div>
                    <div class="mt-6 flex flex-wrap justify-center md:justify-start">
                        {VALUES.iter().map(|v| view! { <ValueChip label=*v /> }).collect_view()}
                    </div>
                </div>

                <div class="animate-fade-up [animation-delay:100ms]">
                    <Card class="relative overflow-hidden p-0">
                        <div class="relative h-full">
                            <FadeImage src=HERO_SRC alt=HERO_NAME class="h-80 w-full object-cover md:h-[440px]" />
                            <div class="absolute inset-0 bg-gradient-to-t from-[#2B1B12]/70 via-[#2B1B12]/35 to-transparent" />
                            <div class="absolute bottom-0 p-6 text-[#FAF8F5]">
                                <p class="text-lg leading-relaxed drop-shadow italic" style=SERIF>
                                    {HERO_QUOTE}
                                </p>
                                <div class="mt-5 flex flex-wrap gap-4 text-sm" style=DISPLAY>
                                    {HERO_BADGES.iter().map(|(icon, label)| view! {
                                        <span class="inline-flex items-center gap-2">
                                            <IconSvg icon=*icon />
                                            {*label}
                                        </span>
                                    }).collect_view()}
                                </div>
                            </div>
                        </div>
                    </Card>
                </div>
            </div>
        </section>
    }
}
