use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
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
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values can fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("PRESSAI_LOG_LEVEL", "info");
    let releases_dir = PathBuf::from(or_default("PRESSAI_RELEASES_DIR", "./local_releases"));
    let output_path = PathBuf::from(or_default(
        "PRESSAI_OUTPUT_PATH",
        "./ai_sentiment_tecdax.csv",
    ));
    let companies_path = PathBuf::from(or_default(
        "PRESSAI_COMPANIES_PATH",
        "./config/companies.yaml",
    ));

    let max_parallel = parse_usize("PRESSAI_MAX_PARALLEL", "4")?;
    if max_parallel == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRESSAI_MAX_PARALLEL".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        releases_dir,
        output_path,
        companies_path,
        max_parallel,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
