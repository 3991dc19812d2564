//! Photo Showcase and Gallery
//!
//! Both renderers map a fixed photo list to tiles in input order, with an
//! entrance delay keyed by position.

use leptos::*;

use super::fade_image::FadeImage;
use super::layout::DISPLAY;
use super::reveal::{stagger_delay_ms, Reveal};
use crate::content::Photo;

/// Stagger step for the highlights strip
pub const SHOWCASE_STEP_MS: u32 = 50;

/// Stagger step for the gallery grid
pub const GALLERY_STEP_MS: u32 = 30;

/// A photo placed at a list position
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub src: &'static str,
    pub label: &'static str,
    pub delay_ms: u32,
}

/// One tile per photo, same order as the input
pub fn tiles(photos: &[Photo], step_ms: u32) -> Vec<Tile> {
    photos
        .iter()
        .enumerate()
        .map(|(index, photo)| Tile {
            index,
            src: photo.src,
            label: photo.caption,
            delay_ms: stagger_delay_ms(index, step_ms),
        })
        .collect()
}

/// Horizontal strip on mobile, three-column grid on desktop
#[component]
pub fn PhotoShowcase(photos: &'static [Photo]) -> impl IntoView {
    view! {
        <div class="flex gap-4 overflow-x-auto pb-4 md:grid md:grid-cols-3 md:gap-6 md:overflow-visible md:pb-0">
            {tiles(photos, SHOWCASE_STEP_MS).into_iter().map(|tile| view! {
                <Reveal
                    delay_ms=tile.delay_ms
                    class="relative min-w-[78%] flex-[0_0_auto] overflow-hidden rounded-3xl border border-[#D8B27E]/40 bg-white/60 shadow-[0_10px_35px_rgba(0,0,0,0.08)] sm:min-w-[280px] md:min-w-0"
                >
                    <FadeImage src=tile.src alt=tile.label class="h-56 w-full object-cover sm:h-64" />
                    <div class="absolute inset-x-0 bottom-0 bg-gradient-to-t from-[#1F0F08]/80 via-[#1F0F08]/30 to-transparent p-4 text-[#FAF8F5]">
                        <p class="text-sm font-semibold" style=DISPLAY>{tile.label}</p>
                    </div>
                </Reveal>
            }).collect_view()}
        </div>
    }
}

/// Full photo archive grid
#[component]
pub fn GalleryGrid(photos: &'static [Photo]) -> impl IntoView {
    view! {
        <div class="grid gap-4 sm:grid-cols-2 md:grid-cols-3">
            {tiles(photos, GALLERY_STEP_MS).into_iter().map(|tile| view! {
                <Reveal
                    delay_ms=tile.delay_ms
                    threshold=0.2
                    class="relative overflow-hidden rounded-2xl border border-[#D8B27E]/50 bg-white/70 shadow-[0_6px_24px_rgba(0,0,0,0.06)]"
                >
                    <FadeImage src=tile.src alt=tile.label class="aspect-[4/5] w-full object-cover" lazy=true />
                    <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-[#2B1B12]/60 via-transparent to-transparent opacity-60" />
                    <div class="absolute bottom-3 left-3 rounded-full bg-[#FAF8F5]/90 px-3 py-1 text-xs font-semibold text-[#7C3E2E] shadow">
                        {tile.label}
                    </div>
                </Reveal>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{GALLERY_PHOTOS, HIGHLIGHT_PHOTOS};

    #[test]
    fn test_one_tile_per_photo_in_order() {
        let result = tiles(GALLERY_PHOTOS, GALLERY_STEP_MS);
        assert_eq!(result.len(), GALLERY_PHOTOS.len());
        for (tile, photo) in result.iter().zip(GALLERY_PHOTOS) {
            assert_eq!(tile.src, photo.src);
            assert_eq!(tile.label, photo.caption);
        }
    }

    #[test]
    fn test_delays_follow_position() {
        let result = tiles(HIGHLIGHT_PHOTOS, SHOWCASE_STEP_MS);
        let delays: Vec<_> = result.iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200, 250]);
        assert!(result.iter().enumerate().all(|(i, t)| t.index == i));
    }

    #[test]
    fn test_empty_list() {
        assert!(tiles(&[], GALLERY_STEP_MS).is_empty());
    }
}
