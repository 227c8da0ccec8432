use dotenv::dotenv;
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::catalog::DEFAULT_CASE_COUNT;

pub const CASE_COUNT_VAR: &str = "CRIME_WATCH_CASE_COUNT";
pub const SEED_VAR: &str = "CRIME_WATCH_SEED";
pub const LOG_FILE_VAR: &str = "CRIME_WATCH_LOG_FILE";
pub const DEBUG_VAR: &str = "DEBUG";

/// Upper bound on generated cases; the dashboard keeps them all in memory.
pub const MAX_CASE_COUNT: usize = 100_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{key} is {value}, which exceeds the maximum of {max}")]
    TooLarge {
        key: &'static str,
        value: usize,
        max: usize,
    },
}

/// Runtime settings for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub case_count: usize,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            case_count: DEFAULT_CASE_COUNT,
            seed: None,
            log_file: None,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Loads settings from the environment, after reading an optional `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or blank keys
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = value(CASE_COUNT_VAR) {
            let count = parse_number::<usize>(CASE_COUNT_VAR, &raw)?;
            if count > MAX_CASE_COUNT {
                return Err(ConfigError::TooLarge {
                    key: CASE_COUNT_VAR,
                    value: count,
                    max: MAX_CASE_COUNT,
                });
            }
            config.case_count = count;
        }

        if let Some(raw) = value(SEED_VAR) {
            config.seed = Some(parse_number::<u64>(SEED_VAR, &raw)?);
        }

        config.log_file = value(LOG_FILE_VAR).map(PathBuf::from);
        config.debug = value(DEBUG_VAR)
            .is_some_and(|raw| matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes"));

        Ok(config)
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    raw.parse().map_err(|source| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
        source,
    })
}
