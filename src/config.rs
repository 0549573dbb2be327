use std::env;

use eyre::{eyre, Result, WrapErr};
use tracing::Level;

const LOG_LEVEL: &str = "KEYPROOF_LOG_LEVEL";
const EXPORTABLE: &str = "KEYPROOF_EXPORTABLE";

/// Settings read from the environment, after `.env` files are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default level of the log output.
    pub log_level: Level,
    /// Whether generated private keys can be exported unless told otherwise.
    pub exportable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            exportable: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL) {
            config.log_level = level
                .trim()
                .parse()
                .wrap_err_with(|| format!("{LOG_LEVEL} is not a log level: {level:?}"))?;
        }

        if let Some(exportable) = lookup(EXPORTABLE) {
            config.exportable = parse_flag(&exportable)
                .ok_or_else(|| eyre!("{EXPORTABLE} is not a boolean: {exportable:?}"))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
