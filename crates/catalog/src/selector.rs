//! Filtering, sorting and featured annotation for listing pages.

use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::NaiveDate;
use icu_collator::{Collator, CollatorOptions, Strength};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{Exhibition, Listable, Story},
    error::DomainError,
    protocol::Annotated,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    #[serde(alias = "alpha")]
    Alphabetical,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "alphabetical" | "alpha" => Ok(SortKey::Alphabetical),
            _ => Err(DomainError::UnknownSortKey(s.to_string())),
        }
    }
}

/// How "newest" and "oldest" are decided for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chronology {
    /// Insertion order is oldest-first.
    Positional,
    /// Ordered by the parsed start date.
    StartDate,
}

pub trait Selectable: Listable + Clone {
    const CHRONOLOGY: Chronology;

    fn start_date(&self) -> Option<NaiveDate> {
        None
    }
}

impl Selectable for Story {
    const CHRONOLOGY: Chronology = Chronology::Positional;
}

impl Selectable for Exhibition {
    const CHRONOLOGY: Chronology = Chronology::StartDate;

    fn start_date(&self) -> Option<NaiveDate> {
        Some(self.start_date)
    }
}

pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Story listing criteria. Every present field must match. Empty strings are
/// treated as absent, the way an "All" option is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryFilter {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub geography: Option<String>,
}

impl RecordFilter<Story> for StoryFilter {
    fn matches(&self, story: &Story) -> bool {
        if let Some(theme) = present(&self.theme) {
            if !story.theme.iter().any(|t| t == theme) {
                return false;
            }
        }
        if let Some(period) = present(&self.time_period) {
            if story.time_period != period {
                return false;
            }
        }
        if let Some(geography) = present(&self.geography) {
            if story.geography != geography {
                return false;
            }
        }
        true
    }
}

/// Exhibition listing criteria. Values are compared against the wire names
/// (`exhibition`, `current`, ...); anything else matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionFilter {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RecordFilter<Exhibition> for ExhibitionFilter {
    fn matches(&self, exhibition: &Exhibition) -> bool {
        if let Some(kind) = present(&self.kind) {
            if exhibition.kind.as_str() != kind {
                return false;
            }
        }
        if let Some(status) = present(&self.status) {
            if exhibition.status.as_str() != status {
                return false;
            }
        }
        true
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedPolicy {
    /// Exactly one record among the first `pinned_window` is featured.
    pub pinned_window: usize,
    /// Chance that any record past the pinned window is featured.
    pub random_rate: f64,
}

impl Default for FeaturedPolicy {
    fn default() -> Self {
        Self {
            pinned_window: 2,
            random_rate: 0.15,
        }
    }
}

/// Marks featured records over the whole collection in its stored order.
///
/// One draw picks the pinned index, then one draw per record past the
/// window. If the pinned pick lands past the end of a short collection,
/// nothing in the window is featured. Empty input consumes no randomness.
pub fn annotate_featured<T, R>(
    records: &[T],
    policy: &FeaturedPolicy,
    rng: &mut R,
) -> Vec<Annotated<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if records.is_empty() {
        return Vec::new();
    }

    let pinned = (policy.pinned_window > 0).then(|| rng.gen_range(0..policy.pinned_window));

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let is_featured = if index < policy.pinned_window {
                pinned == Some(index)
            } else {
                rng.gen::<f64>() < policy.random_rate
            };
            Annotated {
                record: record.clone(),
                is_featured,
            }
        })
        .collect()
}

/// Annotates, then filters, then sorts.
///
/// Featured flags are decided before filtering, so a filter can drop the
/// pinned record without another one being picked.
pub fn select_and_annotate<T, F, R>(
    records: &[T],
    filter: &F,
    sort: SortKey,
    policy: &FeaturedPolicy,
    rng: &mut R,
) -> Vec<Annotated<T>>
where
    T: Selectable,
    F: RecordFilter<T>,
    R: Rng + ?Sized,
{
    let mut selected: Vec<Annotated<T>> = annotate_featured(records, policy, rng)
        .into_iter()
        .filter(|item| filter.matches(&item.record))
        .collect();

    sort_annotated(&mut selected, sort);

    debug!(
        total = records.len(),
        selected = selected.len(),
        featured = selected.iter().filter(|item| item.is_featured).count(),
        sort = %sort,
        "selected listing records"
    );
    selected
}

pub fn select_stories<R: Rng + ?Sized>(
    records: &[Story],
    filter: &StoryFilter,
    sort: SortKey,
    rng: &mut R,
) -> Vec<Annotated<Story>> {
    select_and_annotate(records, filter, sort, &FeaturedPolicy::default(), rng)
}

pub fn select_exhibitions<R: Rng + ?Sized>(
    records: &[Exhibition],
    filter: &ExhibitionFilter,
    sort: SortKey,
    rng: &mut R,
) -> Vec<Annotated<Exhibition>> {
    select_and_annotate(records, filter, sort, &FeaturedPolicy::default(), rng)
}

fn sort_annotated<T: Selectable>(items: &mut [Annotated<T>], sort: SortKey) {
    match (sort, T::CHRONOLOGY) {
        (SortKey::Newest, Chronology::Positional) => items.reverse(),
        (SortKey::Oldest, Chronology::Positional) => {}
        (SortKey::Newest, Chronology::StartDate) => {
            items.sort_by(|a, b| b.record.start_date().cmp(&a.record.start_date()))
        }
        (SortKey::Oldest, Chronology::StartDate) => {
            items.sort_by_key(|item| item.record.start_date())
        }
        (SortKey::Alphabetical, _) => {
            items.sort_by(|a, b| compare_titles(a.record.title(), b.record.title()))
        }
    }
}

thread_local! {
    static TITLE_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options)
            .map_err(|error| warn!(%error, "title collator unavailable, falling back to case folding"))
            .ok()
    };
}

/// Root-locale collation, so accented titles sort beside their base letter
/// and case differences only break ties. Equal collation keys fall back to
/// the raw strings to keep the order total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let collated = TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_case(a).cmp(fold_case(b)),
    });
    collated.then_with(|| a.cmp(b))
}

fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
