pub mod carousel;
pub mod hero;
pub mod layout;
pub mod logo;
pub mod window;

pub use carousel::{Carousel, Key, KeyOutcome};
pub use layout::{
    build_snapshot, indicator_dots, layout_cards, story_image, CardTransform, IndicatorDot,
    LayoutMode, PlacedCard,
};
pub use hero::{HeroCutouts, PlacedCutout};
pub use logo::{AmbientDisplay, LogoStack};
pub use window::{normalize_offset, visible_window, window_offsets, VisibleItem};
