pub mod content;
pub mod excerpt;
pub mod lookup;
pub mod selector;

pub use excerpt::{truncate_excerpt, CARD_EXCERPT_BUDGET};
pub use lookup::{
    exhibition_by_slug, related_stories, showcase, story_by_slug, story_position, CatalogError,
};
pub use selector::{
    annotate_featured, select_and_annotate, select_exhibitions, select_stories, ExhibitionFilter,
    FeaturedPolicy, RecordFilter, Selectable, SortKey, StoryFilter,
};
