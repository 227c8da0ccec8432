mod app_config;

pub use app_config::{
    AppConfig, ConfigError, CASE_COUNT_VAR, DEBUG_VAR, LOG_FILE_VAR, MAX_CASE_COUNT, SEED_VAR,
};
