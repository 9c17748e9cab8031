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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; defaults mirror [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let bind_addr = match lookup("FINCLVR_BIND_ADDR") {
        Ok(raw) => raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "FINCLVR_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?,
        Err(_) => defaults.bind_addr,
    };

    let env = parse_environment(&or_default("FINCLVR_ENV", "development"))?;
    let log_level = or_default("FINCLVR_LOG_LEVEL", &defaults.log_level);

    let seed_demo_user = match lookup("FINCLVR_SEED_DEMO_USER") {
        Ok(raw) => parse_bool("FINCLVR_SEED_DEMO_USER", &raw)?,
        Err(_) => defaults.seed_demo_user,
    };

    let default_niche = or_default("FINCLVR_DEFAULT_NICHE", &defaults.default_niche);
    if default_niche.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "FINCLVR_DEFAULT_NICHE".to_string(),
            reason: "must not be blank".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        seed_demo_user,
        default_niche: default_niche.trim().to_string(),
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FINCLVR_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
