use crate::scout_config::ScoutConfig;
use crate::ConfigError;

/// Load scout configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_scout_config() -> Result<ScoutConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_scout_config_from_env()
}

/// Load scout configuration from the variables already in the process.
///
/// Unlike [`load_scout_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_scout_config_from_env() -> Result<ScoutConfig, ConfigError> {
    build_scout_config(|key| std::env::var(key))
}

/// Build scout configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent ones take the [`ScoutConfig::default`]
/// value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unparsable numbers, a blank
/// coupon host, or an aggregator list with no usable entries.
pub fn build_scout_config<F>(lookup: F) -> Result<ScoutConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = ScoutConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let coupon_host = or_default("CLIPSCOUT_COUPON_HOST", &defaults.coupon_host)
        .trim()
        .to_string();
    if coupon_host.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CLIPSCOUT_COUPON_HOST".to_string(),
            reason: "must not be blank".to_string(),
        });
    }

    let known_aggregators = match lookup("CLIPSCOUT_KNOWN_AGGREGATORS") {
        Ok(raw) => parse_aggregator_list(&raw)?,
        Err(_) => defaults.known_aggregators,
    };

    Ok(ScoutConfig {
        coupon_host,
        user_agent: or_default("CLIPSCOUT_USER_AGENT", &defaults.user_agent),
        accept: defaults.accept,
        accept_language: or_default("CLIPSCOUT_ACCEPT_LANGUAGE", &defaults.accept_language),
        link_timeout_secs: parse_u64("CLIPSCOUT_LINK_TIMEOUT_SECS", defaults.link_timeout_secs)?,
        detail_timeout_secs: parse_u64(
            "CLIPSCOUT_DETAIL_TIMEOUT_SECS",
            defaults.detail_timeout_secs,
        )?,
        backend_delay_ms: parse_u64("CLIPSCOUT_BACKEND_DELAY_MS", defaults.backend_delay_ms)?,
        page_delay_ms: parse_u64("CLIPSCOUT_PAGE_DELAY_MS", defaults.page_delay_ms)?,
        detail_delay_ms: parse_u64("CLIPSCOUT_DETAIL_DELAY_MS", defaults.detail_delay_ms)?,
        known_aggregators,
        google_url: or_default("CLIPSCOUT_GOOGLE_URL", &defaults.google_url),
        duckduckgo_url: or_default("CLIPSCOUT_DUCKDUCKGO_URL", &defaults.duckduckgo_url),
        bing_url: or_default("CLIPSCOUT_BING_URL", &defaults.bing_url),
        log_level: or_default("CLIPSCOUT_LOG_LEVEL", &defaults.log_level),
    })
}

/// Split a comma-separated aggregator override, keeping order and dropping
/// blank entries.
fn parse_aggregator_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let pages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if pages.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CLIPSCOUT_KNOWN_AGGREGATORS".to_string(),
            reason: "no aggregator URLs listed".to_string(),
        });
    }
    Ok(pages)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
