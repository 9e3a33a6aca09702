//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `NIORD_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Values already set through builder methods are not overwritten.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("NIORD_BASE_URL") {
        loader.base_url.get_or_insert(url);
    }
    if let Some(token) = env_var_or_none("NIORD_ACCESS_TOKEN") {
        loader
            .access_token
            .get_or_insert_with(|| SecretString::new(token.into()));
    }
    if let Some(url) = env_var_or_none("NIORD_AUTH_SERVER_URL") {
        loader.auth_server_url.get_or_insert(url);
    }
    if let Some(domain) = env_var_or_none("NIORD_DOMAIN") {
        loader.domain.get_or_insert(domain);
    }
    if let Some(skip) = parse_env::<bool>("NIORD_SKIP_VERIFY", "must be true or false")? {
        loader.skip_verify.get_or_insert(skip);
    }
    if let Some(secs) = parse_env::<u64>("NIORD_TIMEOUT", "must be a number")? {
        loader.timeout.get_or_insert(Duration::from_secs(secs));
    }
    if let Some(value) =
        parse_env::<usize>("NIORD_MAX_RETRIES", "must be a non-negative integer")?
    {
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.max_retries.get_or_insert(value);
    }
    if let Some(languages) = env_var_or_none("NIORD_LANGUAGES") {
        let languages: Vec<String> = languages
            .split(',')
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        if !languages.is_empty() {
            loader.languages.get_or_insert(languages);
        }
    }
    if let Some(secs) = parse_env::<u64>("NIORD_STATUS_POLL_SECS", "must be a number")? {
        loader
            .status_poll_interval
            .get_or_insert(Duration::from_secs(secs));
    }
    if let Some(secs) = parse_env::<u64>("NIORD_DETAIL_POLL_SECS", "must be a number")? {
        loader
            .detail_poll_interval
            .get_or_insert(Duration::from_secs(secs));
    }
    Ok(())
}
