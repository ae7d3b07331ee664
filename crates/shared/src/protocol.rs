use serde::{Deserialize, Serialize};

use crate::domain::{Exhibition, Story};

/// A record plus its per-request featured flag. The flag is never part of
/// the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotated<T> {
    pub record: T,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDetail {
    pub story: Story,
    /// Zero-based position in the story collection.
    pub position: usize,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExhibitionDetail {
    pub exhibition: Exhibition,
    pub related_stories: Vec<Story>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimePeriodOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub themes: Vec<String>,
    pub time_periods: Vec<TimePeriodOption>,
    pub geographies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselCard {
    pub index: usize,
    pub offset: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub background: String,
    pub foreground: String,
    pub translate_x_percent: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselDot {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub length: usize,
    pub cards: Vec<CarouselCard>,
    pub dots: Vec<CarouselDot>,
}
