use serde::Deserialize;
use std::env;

use crate::models::profile::{Profile, DEFAULT_VIP_ROWS};

/// Grid size used by the VIP-row profile when none is configured.
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 8;

// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cinema: CinemaConfig,
}

// Process-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    RandomFill,
    #[default]
    VipRows,
}

// Auditorium settings, read from CINEMA_* variables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CinemaConfig {
    #[serde(default)]
    pub profile: ProfileKind,
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub cols: Option<usize>,
    #[serde(default = "default_vip_rows")]
    pub vip_rows: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_vip_rows() -> usize {
    DEFAULT_VIP_ROWS
}

impl Default for CinemaConfig {
    fn default() -> Self {
        CinemaConfig {
            profile: ProfileKind::default(),
            rows: None,
            cols: None,
            vip_rows: DEFAULT_VIP_ROWS,
            seed: None,
        }
    }
}

impl CinemaConfig {
    pub fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn profile(&self) -> Profile {
        match self.profile {
            ProfileKind::RandomFill => Profile::RandomFill,
            ProfileKind::VipRows => Profile::VipRows {
                vip_rows: self.vip_rows,
            },
        }
    }

    /// Configured dimensions. The VIP-row profile falls back to 5x8; the
    /// random-fill profile returns `None` for anything left unset so the
    /// caller can ask for it.
    pub fn dimensions(&self) -> (Option<usize>, Option<usize>) {
        match self.profile {
            ProfileKind::VipRows => (
                Some(self.rows.unwrap_or(DEFAULT_ROWS)),
                Some(self.cols.unwrap_or(DEFAULT_COLS)),
            ),
            ProfileKind::RandomFill => (self.rows, self.cols),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(other) => {
                return Err(config::ConfigError::Message(format!(
                    "LOG_FORMAT must be pretty or json, got {other}"
                )))
            }
        };

        Ok(Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_seating=info".to_string()),
                log_format,
            },
            cinema: CinemaConfig::from_source(
                config::Environment::with_prefix("CINEMA").try_parsing(true),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("CINEMA")
            .try_parsing(true)
            .source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let cfg = CinemaConfig::from_source(env_source(&[])).unwrap();
        assert_eq!(cfg, CinemaConfig::default());
        assert_eq!(cfg.profile(), Profile::VipRows { vip_rows: 2 });
        assert_eq!(cfg.dimensions(), (Some(5), Some(8)));
    }

    #[test]
    fn test_random_fill_from_env() {
        let cfg = CinemaConfig::from_source(env_source(&[
            ("CINEMA_PROFILE", "random_fill"),
            ("CINEMA_ROWS", "10"),
            ("CINEMA_SEED", "1234"),
        ]))
        .unwrap();
        assert_eq!(cfg.profile(), Profile::RandomFill);
        assert_eq!(cfg.seed, Some(1234));
        assert_eq!(cfg.dimensions(), (Some(10), None));
    }

    #[test]
    fn test_vip_rows_override() {
        let cfg = CinemaConfig::from_source(env_source(&[
            ("CINEMA_VIP_ROWS", "3"),
            ("CINEMA_COLS", "12"),
        ]))
        .unwrap();
        assert_eq!(cfg.profile(), Profile::VipRows { vip_rows: 3 });
        assert_eq!(cfg.dimensions(), (Some(5), Some(12)));
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        assert!(CinemaConfig::from_source(env_source(&[("CINEMA_PROFILE", "stadium")])).is_err());
    }
}
