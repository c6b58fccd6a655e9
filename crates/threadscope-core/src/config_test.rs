use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "THREADSCOPE_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8001");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.vocabulary_path.is_none());
    assert!(cfg.default_company_description.is_none());
    assert!((cfg.min_relevance - 50.0).abs() < f64::EPSILON);
    assert_eq!(cfg.min_trend_posts, 2);
    assert_eq!(cfg.max_batch_size, 100);
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THREADSCOPE_BIND_ADDR"),
        "expected InvalidEnvVar(THREADSCOPE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn vocabulary_path_override() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_VOCABULARY_PATH", "./config/vocabulary.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.vocabulary_path.as_deref(),
        Some(std::path::Path::new("./config/vocabulary.yaml"))
    );
}

#[test]
fn blank_default_company_description_is_ignored() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_DEFAULT_COMPANY_DESCRIPTION", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.default_company_description.is_none());
}

#[test]
fn default_company_description_is_redacted_in_debug() {
    let mut map = HashMap::new();
    map.insert(
        "THREADSCOPE_DEFAULT_COMPANY_DESCRIPTION",
        "Stealth longevity startup",
    );
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(debug.contains("[redacted]"));
    assert!(!debug.contains("Stealth longevity startup"));
}

#[test]
fn min_relevance_override() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_MIN_RELEVANCE", "72.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.min_relevance - 72.5).abs() < f64::EPSILON);
}

#[test]
fn min_relevance_out_of_range() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_MIN_RELEVANCE", "150");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THREADSCOPE_MIN_RELEVANCE"),
        "expected InvalidEnvVar(THREADSCOPE_MIN_RELEVANCE), got: {result:?}"
    );
}

#[test]
fn min_relevance_invalid() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_MIN_RELEVANCE", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THREADSCOPE_MIN_RELEVANCE"),
        "expected InvalidEnvVar(THREADSCOPE_MIN_RELEVANCE), got: {result:?}"
    );
}

#[test]
fn min_trend_posts_override() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_MIN_TREND_POSTS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.min_trend_posts, 5);
}

#[test]
fn max_batch_size_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_MAX_BATCH_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THREADSCOPE_MAX_BATCH_SIZE"),
        "expected InvalidEnvVar(THREADSCOPE_MAX_BATCH_SIZE), got: {result:?}"
    );
}

#[test]
fn rate_limit_per_minute_invalid() {
    let mut map = HashMap::new();
    map.insert("THREADSCOPE_RATE_LIMIT_PER_MINUTE", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THREADSCOPE_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(THREADSCOPE_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}
