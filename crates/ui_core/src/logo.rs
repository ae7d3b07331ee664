//! Scrolling logo mark pinned to the top-left corner.

use serde::{Deserialize, Serialize};

pub const LOGO_VARIANTS: [&str; 4] = [
    "/images/m1.svg",
    "/images/m2.svg",
    "/images/m3.svg",
    "/images/m4.svg",
];

const SECTION_HEIGHT: f64 = 600.0;
const SHRINK_END: f64 = 300.0;
const FADE_START: f64 = 100.0;
const MAX_SCALE: f64 = 1.2;
const BASE_SIZE: f64 = 24.0;
const COMPACT_SIZE: f64 = 16.0;

/// Signal sampled by the host page on every scroll frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AmbientDisplay {
    pub scroll_offset: f64,
    pub is_over_dark_surface: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogoStack {
    pub top_variant: usize,
    pub bottom_variant: usize,
    pub scale: f64,
    /// Edge length of each mark in pixels.
    pub mark_size_px: f64,
    pub wordmark_opacity: f64,
    pub inverted: bool,
}

impl LogoStack {
    pub fn from_ambient(ambient: AmbientDisplay) -> Self {
        let y = ambient.scroll_offset.max(0.0);
        let variants = LOGO_VARIANTS.len();
        // Reduced before the cast so huge offsets cannot saturate.
        let section = ((y / SECTION_HEIGHT).floor() % variants as f64) as usize;

        let scale = if y < SHRINK_END {
            MAX_SCALE - (y / SHRINK_END) * (MAX_SCALE - 1.0)
        } else {
            1.0
        };

        let size = if y < SHRINK_END {
            BASE_SIZE * scale
        } else {
            COMPACT_SIZE
        };

        let wordmark_opacity = if y < FADE_START {
            1.0
        } else if y < SHRINK_END {
            1.0 - (y - FADE_START) / (SHRINK_END - FADE_START)
        } else {
            0.0
        };

        Self {
            top_variant: (section + 1) % variants,
            bottom_variant: section % variants,
            scale,
            mark_size_px: size * 4.0,
            wordmark_opacity,
            inverted: ambient.is_over_dark_surface,
        }
    }

    pub fn top_src(&self) -> &'static str {
        LOGO_VARIANTS[self.top_variant]
    }

    pub fn bottom_src(&self) -> &'static str {
        LOGO_VARIANTS[self.bottom_variant]
    }
}
