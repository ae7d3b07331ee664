use super::{load_settings_from, Settings};

use std::collections::HashMap;

use catalog::SortKey;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    assert_eq!(load_settings_from(None, env_of(&[])), Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let file = r#"
        bind_addr = "0.0.0.0:9000"
        default_sort = "alpha"
        excerpt_budget = 80
        featured_rate = 0.5
    "#;
    let settings = load_settings_from(Some(file), env_of(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.default_sort, SortKey::Alphabetical);
    assert_eq!(settings.excerpt_budget, 80);
    assert_eq!(settings.featured_rate, 0.5);
}

#[test]
fn env_overrides_file() {
    let file = r#"bind_addr = "0.0.0.0:9000""#;
    let settings = load_settings_from(
        Some(file),
        env_of(&[("SERVER_BIND", "127.0.0.1:1"), ("APP__BIND_ADDR", "127.0.0.1:2")]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2");
}

#[test]
fn invalid_values_are_ignored() {
    let settings = load_settings_from(
        Some("not = [valid"),
        env_of(&[
            ("APP__DEFAULT_SORT", "random"),
            ("APP__EXCERPT_BUDGET", "lots"),
            ("APP__FEATURED_RATE", "1.5"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_parses_numeric_values() {
    let settings = load_settings_from(
        None,
        env_of(&[
            ("APP__DEFAULT_SORT", "oldest"),
            ("APP__EXCERPT_BUDGET", "40"),
            ("APP__FEATURED_RATE", "0"),
        ]),
    );
    assert_eq!(settings.default_sort, SortKey::Oldest);
    assert_eq!(settings.excerpt_budget, 40);
    assert_eq!(settings.featured_rate, 0.0);
}
