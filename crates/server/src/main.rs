use std::net::SocketAddr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rand::{rngs::StdRng, SeedableRng};
use shared::{
    domain::{Exhibition, Story},
    error::{ApiError, ErrorCode},
    protocol::{
        Annotated, CarouselSnapshot, ExhibitionDetail, FilterOptions, Listing, StoryDetail,
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ui_core::PlacedCutout;

mod api;
mod config;

use api::{
    exhibition_detail, exhibition_showcase, filter_options, hero_cutouts, list_exhibitions,
    list_stories, story_carousel, story_detail, ApiContext, CarouselQuery, ExhibitionQuery,
    HeroQuery, ShowcaseQuery, StoryQuery,
};
use config::load_settings;

/// Cloned per request; the content it holds sits behind `Arc`s.
#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

type HttpError = (StatusCode, Json<ApiError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let api = ApiContext::from_settings(&settings);
    info!(
        stories = api.stories.len(),
        exhibitions = api.exhibitions.len(),
        default_sort = %settings.default_sort,
        "content loaded"
    );

    let app = build_router(AppState { api });

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/filters", get(http_filters))
        .route("/stories", get(http_list_stories))
        .route("/stories/:slug", get(http_story_detail))
        .route("/exhibitions", get(http_list_exhibitions))
        .route("/exhibitions/:slug", get(http_exhibition_detail))
        .route("/showcase", get(http_showcase))
        .route("/hero", get(http_hero))
        .route("/carousel/stories", get(http_story_carousel))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn http_error(error: ApiError) -> HttpError {
    (status_for(error.code), Json(error))
}

/// Seeded requests get reproducible featured flags.
fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

async fn http_filters() -> Json<FilterOptions> {
    Json(filter_options())
}

async fn http_list_stories(
    State(state): State<AppState>,
    Query(query): Query<StoryQuery>,
) -> Result<Json<Listing<Annotated<Story>>>, HttpError> {
    let mut rng = request_rng(query.seed);
    let listing = list_stories(&state.api, &query, &mut rng).map_err(http_error)?;
    debug!(total = listing.total, "listed stories");
    Ok(Json(listing))
}

async fn http_story_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StoryDetail>, HttpError> {
    story_detail(&state.api, &slug).map(Json).map_err(http_error)
}

async fn http_list_exhibitions(
    State(state): State<AppState>,
    Query(query): Query<ExhibitionQuery>,
) -> Result<Json<Listing<Annotated<Exhibition>>>, HttpError> {
    let mut rng = request_rng(query.seed);
    let listing = list_exhibitions(&state.api, &query, &mut rng).map_err(http_error)?;
    debug!(total = listing.total, "listed exhibitions");
    Ok(Json(listing))
}

async fn http_exhibition_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ExhibitionDetail>, HttpError> {
    exhibition_detail(&state.api, &slug)
        .map(Json)
        .map_err(http_error)
}

async fn http_story_carousel(
    State(state): State<AppState>,
    Query(query): Query<CarouselQuery>,
) -> Json<CarouselSnapshot> {
    Json(story_carousel(&state.api, &query))
}

async fn http_showcase(
    State(state): State<AppState>,
    Query(query): Query<ShowcaseQuery>,
) -> Json<Listing<Exhibition>> {
    Json(exhibition_showcase(&state.api, &query))
}

async fn http_hero(Query(query): Query<HeroQuery>) -> Json<Vec<PlacedCutout>> {
    let mut rng = request_rng(query.seed);
    Json(hero_cutouts(&query, &mut rng))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
