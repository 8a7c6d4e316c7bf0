//! Store and logging configuration loaded from the environment.
//!
//! Reads `DATABASE_URL`, `ASSISTENCIA_BUSY_TIMEOUT_MS`,
//! `ASSISTENCIA_LOG_LEVEL` and `ASSISTENCIA_LOG_DIR`. A `.env` file in the
//! working directory is loaded once, if present.

use crate::logging::default_log_level;
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BUSY_TIMEOUT_VAR: &str = "ASSISTENCIA_BUSY_TIMEOUT_MS";
pub const LOG_LEVEL_VAR: &str = "ASSISTENCIA_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "ASSISTENCIA_LOG_DIR";

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    // missing .env is fine
    let _ = dotenvy::dotenv();
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDatabaseUrl,
    UnsupportedScheme(String),
    InvalidNumber { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDatabaseUrl => write!(f, "{DATABASE_URL_VAR} cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "unsupported database scheme `{scheme}`; expected sqlite:, sqlite:// or a file path"
            ),
            Self::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Where the relational store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    Memory,
    File(PathBuf),
}

impl DbLocation {
    /// Parses a connection string.
    ///
    /// Accepts `sqlite::memory:`, `:memory:`, `sqlite://<path>`,
    /// `sqlite:<path>` and bare file paths.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        let rest = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"));
        let target = match rest {
            Some(rest) => rest,
            None => {
                if let Some((scheme, _)) = trimmed.split_once("://") {
                    return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
                }
                trimmed
            }
        };

        match target {
            "" => Err(ConfigError::EmptyDatabaseUrl),
            ":memory:" => Ok(Self::Memory),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub location: DbLocation,
    pub busy_timeout: Duration,
}

impl DbConfig {
    pub fn in_memory() -> Self {
        Self {
            location: DbLocation::Memory,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DbLocation::File(path.into()),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Logging stays off when no directory is configured.
    pub dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads configuration from process environment (after `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let location = DbLocation::parse(&url)?;

        let busy_timeout_ms = match lookup(BUSY_TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: BUSY_TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };

        let level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string());
        let dir = lookup(LOG_DIR_VAR).filter(|dir| !dir.trim().is_empty());

        Ok(Self {
            db: DbConfig {
                location,
                busy_timeout: Duration::from_millis(busy_timeout_ms),
            },
            log: LogConfig { level, dir },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DbLocation, BUSY_TIMEOUT_VAR, DATABASE_URL_VAR};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_accepts_memory_forms() {
        assert_eq!(DbLocation::parse("sqlite::memory:").unwrap(), DbLocation::Memory);
        assert_eq!(DbLocation::parse(":memory:").unwrap(), DbLocation::Memory);
        assert_eq!(DbLocation::parse("sqlite://:memory:").unwrap(), DbLocation::Memory);
    }

    #[test]
    fn parse_accepts_file_forms() {
        let expected = DbLocation::File(PathBuf::from("/var/lib/app/acompanhamento.db"));
        assert_eq!(
            DbLocation::parse("sqlite:///var/lib/app/acompanhamento.db").unwrap(),
            expected
        );
        assert_eq!(
            DbLocation::parse(" /var/lib/app/acompanhamento.db ").unwrap(),
            expected
        );
        assert_eq!(
            DbLocation::parse("sqlite:data.db").unwrap(),
            DbLocation::File(PathBuf::from("data.db"))
        );
    }

    #[test]
    fn parse_rejects_foreign_schemes_and_empty_urls() {
        let err = DbLocation::parse("postgresql://app@localhost:5432/sistema").unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("postgresql".to_string()));
        assert_eq!(DbLocation::parse("  ").unwrap_err(), ConfigError::EmptyDatabaseUrl);
        assert_eq!(DbLocation::parse("sqlite://").unwrap_err(), ConfigError::EmptyDatabaseUrl);
    }

    #[test]
    fn from_lookup_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.db.location, DbLocation::Memory);
        assert_eq!(config.db.busy_timeout, Duration::from_millis(5_000));
        assert!(config.log.dir.is_none());
    }

    #[test]
    fn from_lookup_reads_values_and_rejects_bad_timeout() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "sqlite:///tmp/a.db"),
            (BUSY_TIMEOUT_VAR, "250"),
        ]))
        .unwrap();
        assert_eq!(config.db.location, DbLocation::File(PathBuf::from("/tmp/a.db")));
        assert_eq!(config.db.busy_timeout, Duration::from_millis(250));

        let err = AppConfig::from_lookup(lookup_from(&[(BUSY_TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
