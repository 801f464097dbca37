use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://trends.google.com";
pub const DEFAULT_GEO: &str = "ID";
pub const DEFAULT_HOST_LANGUAGE: &str = "id-ID";
pub const DEFAULT_USER_AGENT: &str = "ytrends/0.1 (trend-dashboard)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_i32 = |var: &str, default: &str| -> Result<i32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let non_blank = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        Ok(raw.trim().to_string())
    };

    let log_level = or_default("YTRENDS_LOG_LEVEL", "warn");
    let base_url = non_blank("YTRENDS_BASE_URL", DEFAULT_BASE_URL)?;
    let geo = non_blank("YTRENDS_GEO", DEFAULT_GEO)?.to_uppercase();
    let host_language = non_blank("YTRENDS_HOST_LANGUAGE", DEFAULT_HOST_LANGUAGE)?;
    let user_agent = non_blank("YTRENDS_USER_AGENT", DEFAULT_USER_AGENT)?;

    let tz_offset_minutes = parse_i32("YTRENDS_TZ_OFFSET_MINUTES", "420")?;
    // Counted west of UTC: UTC+14:00 is -840, UTC-12:00 is 720.
    if !(-14 * 60..=12 * 60).contains(&tz_offset_minutes) {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTRENDS_TZ_OFFSET_MINUTES".to_string(),
            reason: format!("{tz_offset_minutes} is outside -840..=720"),
        });
    }

    let connect_timeout_secs = parse_u64("YTRENDS_CONNECT_TIMEOUT_SECS", "10")?;
    let read_timeout_secs = parse_u64("YTRENDS_READ_TIMEOUT_SECS", "25")?;
    for (var, value) in [
        ("YTRENDS_CONNECT_TIMEOUT_SECS", connect_timeout_secs),
        ("YTRENDS_READ_TIMEOUT_SECS", read_timeout_secs),
    ] {
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
    }

    Ok(AppConfig {
        log_level,
        base_url,
        geo,
        host_language,
        tz_offset_minutes,
        user_agent,
        connect_timeout_secs,
        read_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
