use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; parsing is decoupled from the real environment
/// so it can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("THREADSCOPE_ENV", "development"))?;
    let bind_addr = parse_addr("THREADSCOPE_BIND_ADDR", "0.0.0.0:8001")?;
    let log_level = or_default("THREADSCOPE_LOG_LEVEL", "info");
    let vocabulary_path = optional("THREADSCOPE_VOCABULARY_PATH").map(PathBuf::from);
    let default_company_description = optional("THREADSCOPE_DEFAULT_COMPANY_DESCRIPTION");

    let min_relevance = parse_min_relevance(&or_default("THREADSCOPE_MIN_RELEVANCE", "50"))?;
    let min_trend_posts = parse_usize("THREADSCOPE_MIN_TREND_POSTS", "2")?;

    let max_batch_size = parse_usize("THREADSCOPE_MAX_BATCH_SIZE", "100")?;
    if max_batch_size == 0 {
        return Err(invalid(
            "THREADSCOPE_MAX_BATCH_SIZE",
            "must be at least 1".to_string(),
        ));
    }

    let rate_limit_per_minute = parse_usize("THREADSCOPE_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        vocabulary_path,
        default_company_description,
        min_relevance,
        min_trend_posts,
        max_batch_size,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "THREADSCOPE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Relevance thresholds share the score's `[0, 100]` range.
fn parse_min_relevance(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "THREADSCOPE_MIN_RELEVANCE".to_string(),
        reason,
    };

    let value = raw.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(invalid(format!("{value} is outside 0..=100")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
