use std::fs;

use catalog::{SortKey, CARD_EXCERPT_BUDGET};
use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_bind: String,
    pub default_sort: SortKey,
    pub excerpt_budget: usize,
    pub featured_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            default_sort: SortKey::Newest,
            excerpt_budget: CARD_EXCERPT_BUDGET,
            featured_rate: 0.15,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    default_sort: Option<String>,
    excerpt_budget: Option<usize>,
    featured_rate: Option<f64>,
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment variables.
pub(crate) fn load_settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(error) => warn!(%error, file = SETTINGS_FILE, "ignoring unreadable settings file"),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__DEFAULT_SORT") {
        match v.parse::<SortKey>() {
            Ok(sort) => settings.default_sort = sort,
            Err(error) => warn!(%error, "ignoring APP__DEFAULT_SORT"),
        }
    }

    if let Some(v) = env("APP__EXCERPT_BUDGET") {
        match v.parse::<usize>() {
            Ok(budget) => settings.excerpt_budget = budget,
            Err(error) => warn!(%error, value = %v, "ignoring APP__EXCERPT_BUDGET"),
        }
    }

    if let Some(v) = env("APP__FEATURED_RATE") {
        match v.parse::<f64>() {
            Ok(rate) if (0.0..=1.0).contains(&rate) => settings.featured_rate = rate,
            _ => warn!(value = %v, "ignoring APP__FEATURED_RATE; expected a number in [0, 1]"),
        }
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.default_sort {
        match v.parse::<SortKey>() {
            Ok(sort) => settings.default_sort = sort,
            Err(error) => warn!(%error, "ignoring default_sort in settings file"),
        }
    }
    if let Some(v) = file_cfg.excerpt_budget {
        settings.excerpt_budget = v;
    }
    if let Some(v) = file_cfg.featured_rate {
        if (0.0..=1.0).contains(&v) {
            settings.featured_rate = v;
        } else {
            warn!(value = v, "ignoring featured_rate outside [0, 1] in settings file");
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
