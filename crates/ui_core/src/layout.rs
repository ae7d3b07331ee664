//! Offset to transform mapping and snapshot assembly for the rendering
//! surface.

use serde::Serialize;
use shared::{
    domain::{card_colors, Listable},
    protocol::{CarouselCard, CarouselDot, CarouselSnapshot},
};

use crate::{
    carousel::Carousel,
    window::{normalize_offset, window_offsets},
};

/// Horizontal spacing between neighbouring cards, as a percentage of card
/// width.
pub const CARD_SPACING_PERCENT: f64 = 100.0;

const STORY_IMAGE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    pub translate_x_percent: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl CardTransform {
    pub fn for_offset(offset: i64) -> Self {
        let is_center = offset == 0;
        Self {
            translate_x_percent: offset as f64 * CARD_SPACING_PERCENT,
            scale: if is_center { 1.25 } else { 0.9 },
            opacity: if is_center { 1.0 } else { 0.7 },
            z_index: if is_center { 30 } else { 10 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorDot {
    pub index: usize,
    /// Rendered in the wide state.
    pub active: bool,
}

/// One dot per item in the full sequence.
pub fn indicator_dots(len: usize, current: usize) -> Vec<IndicatorDot> {
    (0..len)
        .map(|index| IndicatorDot {
            index,
            active: index == current,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Three-up window around the current card, moved with arrows and dots.
    #[default]
    DesktopPaged,
    /// Every card laid out in a horizontally scrolling row.
    MobileScroll,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCard {
    pub index: usize,
    pub offset: i64,
    pub transform: CardTransform,
}

pub fn layout_cards(mode: LayoutMode, len: usize, current: usize) -> Vec<PlacedCard> {
    let offsets = match mode {
        LayoutMode::DesktopPaged => window_offsets(len, current),
        LayoutMode::MobileScroll => (0..len)
            .map(|index| (index, normalize_offset(index, current, len)))
            .collect(),
    };
    offsets
        .into_iter()
        .map(|(index, offset)| PlacedCard {
            index,
            offset,
            transform: CardTransform::for_offset(offset),
        })
        .collect()
}

/// Hero image for the story at `index`; four images cycle.
pub fn story_image(index: usize) -> String {
    match index % STORY_IMAGE_COUNT + 1 {
        1 => "/images/story.png".to_string(),
        n => format!("/images/story{n}.png"),
    }
}

/// Assembles everything the rendering surface needs for one frame. `excerpt`
/// produces the card body text for an item.
pub fn build_snapshot<T, F>(
    carousel: &Carousel,
    items: &[T],
    mode: LayoutMode,
    excerpt: F,
) -> CarouselSnapshot
where
    T: Listable,
    F: Fn(&T) -> String,
{
    let current = carousel.current_index();
    let cards = layout_cards(mode, items.len(), current)
        .into_iter()
        .map(|placed| {
            let item = &items[placed.index];
            let colors = card_colors(item.accent_color(), placed.offset == 0);
            CarouselCard {
                index: placed.index,
                offset: placed.offset,
                slug: item.slug().to_string(),
                title: item.title().to_string(),
                excerpt: excerpt(item),
                image: story_image(placed.index),
                background: colors.background.to_string(),
                foreground: colors.foreground.to_string(),
                translate_x_percent: placed.transform.translate_x_percent,
                scale: placed.transform.scale,
                opacity: placed.transform.opacity,
                z_index: placed.transform.z_index,
            }
        })
        .collect();

    let dots = indicator_dots(items.len(), current)
        .into_iter()
        .map(|dot| CarouselDot {
            index: dot.index,
            active: dot.active,
        })
        .collect();

    CarouselSnapshot {
        current_index: current,
        length: items.len(),
        cards,
        dots,
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
