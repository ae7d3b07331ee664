use std::sync::Arc;

use catalog::{
    content, exhibition_by_slug, related_stories, select_and_annotate, showcase, story_by_slug,
    story_position, truncate_excerpt, ExhibitionFilter, FeaturedPolicy, SortKey, StoryFilter,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{Exhibition, Story},
    error::ApiError,
    protocol::{
        Annotated, CarouselSnapshot, ExhibitionDetail, FilterOptions, Listing, StoryDetail,
    },
};
use tracing::{debug, warn};
use ui_core::{build_snapshot, story_image, Carousel, HeroCutouts, LayoutMode, PlacedCutout};

use crate::config::Settings;

#[derive(Clone)]
pub struct ApiContext {
    pub stories: Arc<Vec<Story>>,
    pub exhibitions: Arc<Vec<Exhibition>>,
    pub policy: FeaturedPolicy,
    pub default_sort: SortKey,
    pub excerpt_budget: usize,
}

impl ApiContext {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            stories: Arc::new(content::stories().to_vec()),
            exhibitions: Arc::new(content::exhibitions().to_vec()),
            policy: FeaturedPolicy {
                random_rate: settings.featured_rate,
                ..FeaturedPolicy::default()
            },
            default_sort: settings.default_sort,
            excerpt_budget: settings.excerpt_budget,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoryQuery {
    pub theme: Option<String>,
    pub time_period: Option<String>,
    pub geography: Option<String>,
    pub sort: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExhibitionQuery {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselQuery {
    pub index: Option<usize>,
    #[serde(default)]
    pub mobile: bool,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowcaseQuery {
    pub n: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HeroQuery {
    #[serde(default)]
    pub shuffle: bool,
    pub seed: Option<u64>,
}

/// Exhibitions in the home page "what's on" strip when no count is given.
pub const SHOWCASE_DEFAULT: usize = 3;

fn resolve_sort(ctx: &ApiContext, raw: Option<&str>) -> Result<SortKey, ApiError> {
    match raw.filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse::<SortKey>().map_err(ApiError::from),
        None => Ok(ctx.default_sort),
    }
}

pub fn list_stories<R: Rng + ?Sized>(
    ctx: &ApiContext,
    query: &StoryQuery,
    rng: &mut R,
) -> Result<Listing<Annotated<Story>>, ApiError> {
    let sort = resolve_sort(ctx, query.sort.as_deref())?;
    let filter = StoryFilter {
        theme: query.theme.clone(),
        time_period: query.time_period.clone(),
        geography: query.geography.clone(),
    };
    let items = select_and_annotate(ctx.stories.as_slice(), &filter, sort, &ctx.policy, rng);
    Ok(Listing::new(items))
}

pub fn list_exhibitions<R: Rng + ?Sized>(
    ctx: &ApiContext,
    query: &ExhibitionQuery,
    rng: &mut R,
) -> Result<Listing<Annotated<Exhibition>>, ApiError> {
    let sort = resolve_sort(ctx, query.sort.as_deref())?;
    let filter = ExhibitionFilter {
        kind: query.kind.clone(),
        status: query.status.clone(),
    };
    let items = select_and_annotate(ctx.exhibitions.as_slice(), &filter, sort, &ctx.policy, rng);
    Ok(Listing::new(items))
}

pub fn story_detail(ctx: &ApiContext, slug: &str) -> Result<StoryDetail, ApiError> {
    let story = story_by_slug(&ctx.stories, slug).map_err(|error| {
        warn!(%error, "story lookup missed");
        ApiError::from(error)
    })?;
    let position = story_position(&ctx.stories, slug).unwrap_or_default();
    Ok(StoryDetail {
        story: story.clone(),
        position,
        image: story_image(position),
    })
}

pub fn exhibition_detail(ctx: &ApiContext, slug: &str) -> Result<ExhibitionDetail, ApiError> {
    let exhibition = exhibition_by_slug(&ctx.exhibitions, slug).map_err(|error| {
        warn!(%error, "exhibition lookup missed");
        ApiError::from(error)
    })?;
    let related = related_stories(exhibition, &ctx.stories)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    debug!(slug, related = related.len(), "resolved exhibition detail");
    Ok(ExhibitionDetail {
        exhibition: exhibition.clone(),
        related_stories: related,
    })
}

/// Carousel over the full story collection, positioned at `index` (clamped).
pub fn story_carousel(ctx: &ApiContext, query: &CarouselQuery) -> CarouselSnapshot {
    let mut carousel = Carousel::new(ctx.stories.len());
    if let Some(index) = query.index {
        carousel.go_to(index);
    }
    let mode = if query.mobile {
        LayoutMode::MobileScroll
    } else {
        LayoutMode::DesktopPaged
    };
    build_snapshot(&carousel, ctx.stories.as_slice(), mode, |story| {
        truncate_excerpt(&story.excerpt, ctx.excerpt_budget)
    })
}

pub fn exhibition_showcase(ctx: &ApiContext, query: &ShowcaseQuery) -> Listing<Exhibition> {
    let n = query.n.unwrap_or(SHOWCASE_DEFAULT);
    Listing::new(showcase(&ctx.exhibitions, n).to_vec())
}

/// Fixed default cutouts unless `shuffle` is set, in which case two people
/// and one texture are drawn from `rng`.
pub fn hero_cutouts<R: Rng + ?Sized>(query: &HeroQuery, rng: &mut R) -> Vec<PlacedCutout> {
    let cutouts = if query.shuffle {
        HeroCutouts::randomize(rng)
    } else {
        HeroCutouts::default()
    };
    debug!(images = ?cutouts.images(), shuffled = query.shuffle, "placed hero cutouts");
    cutouts.placements()
}

pub fn filter_options() -> FilterOptions {
    content::filter_options()
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
