use shared::{
    domain::{Exhibition, Story},
    error::{ApiError, ErrorCode},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no story with slug '{0}'")]
    StoryNotFound(String),
    #[error("no exhibition with slug '{0}'")]
    ExhibitionNotFound(String),
}

impl From<CatalogError> for ApiError {
    fn from(value: CatalogError) -> Self {
        ApiError::new(ErrorCode::NotFound, value.to_string())
    }
}

pub fn story_by_slug<'a>(stories: &'a [Story], slug: &str) -> Result<&'a Story, CatalogError> {
    stories
        .iter()
        .find(|story| story.slug == slug)
        .ok_or_else(|| CatalogError::StoryNotFound(slug.to_string()))
}

pub fn exhibition_by_slug<'a>(
    exhibitions: &'a [Exhibition],
    slug: &str,
) -> Result<&'a Exhibition, CatalogError> {
    exhibitions
        .iter()
        .find(|exhibition| exhibition.slug == slug)
        .ok_or_else(|| CatalogError::ExhibitionNotFound(slug.to_string()))
}

/// Stories linked from an exhibition, in story collection order. Unknown
/// slugs are skipped.
pub fn related_stories<'a>(exhibition: &Exhibition, stories: &'a [Story]) -> Vec<&'a Story> {
    stories
        .iter()
        .filter(|story| exhibition.related_stories.contains(&story.slug))
        .collect()
}

/// Position of a story in the collection, used to cycle hero imagery.
pub fn story_position(stories: &[Story], slug: &str) -> Option<usize> {
    stories.iter().position(|story| story.slug == slug)
}

/// First `n` exhibitions, as shown in the home page "what's on" strip.
pub fn showcase(exhibitions: &[Exhibition], n: usize) -> &[Exhibition] {
    &exhibitions[..n.min(exhibitions.len())]
}

#[cfg(test)]
#[path = "tests/lookup_tests.rs"]
mod tests;
