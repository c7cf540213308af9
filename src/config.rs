use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level rcal configuration.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RcalConfig {
    /// Calendar display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Custom event storage.
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_num_months")]
    pub num_months: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_today_color")]
    pub today_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            num_months: default_num_months(),
            columns: default_columns(),
            color: true,
            today_color: default_today_color(),
        }
    }
}

fn default_num_months() -> usize {
    1
}
fn default_columns() -> usize {
    3
}
fn default_true() -> bool {
    true
}
fn default_today_color() -> String {
    "yellow".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EventsConfig {
    #[serde(default = "default_events_file")]
    pub file: PathBuf,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            file: default_events_file(),
        }
    }
}

fn default_events_file() -> PathBuf {
    PathBuf::from("events.json")
}

impl RcalConfig {
    /// Reads the TOML file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config: {}", path.display()));
            }
        };
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: RcalConfig = toml::from_str("").unwrap();
        assert_eq!(config, RcalConfig::default());
        assert_eq!(config.display.num_months, 1);
        assert_eq!(config.display.columns, 3);
        assert!(config.display.color);
        assert_eq!(config.events.file, PathBuf::from("events.json"));
    }

    #[test]
    fn partial_sections() {
        let config: RcalConfig = toml::from_str(
            r#"
            [display]
            columns = 4
            color = false

            [events]
            file = "mes_evenements.md"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.columns, 4);
        assert_eq!(config.display.num_months, 1);
        assert!(!config.display.color);
        assert_eq!(config.events.file, PathBuf::from("mes_evenements.md"));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<RcalConfig>("[display]\nweeks = true").is_err());
        assert!(toml::from_str::<RcalConfig>("[holidays]").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = RcalConfig::load(&dir.path().join("rcal.toml")).unwrap();
        assert_eq!(config, RcalConfig::default());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("rcal.toml");
        std::fs::write(&path, "[display]\ncolumns = \"three\"").unwrap();
        let err = RcalConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}
