use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use mkical_core::countdown::{DEFAULT_CALENDAR_NAME, DEFAULT_LOCATION, DEFAULT_SUMMARY};
use mkical_core::uid::DEFAULT_UID_DOMAIN;
use mkical_core::{MkicalError, MkicalResult};
use serde::Deserialize;
use tracing::debug;

use crate::Cli;

pub const DEFAULT_MONTHS: i64 = 42;

/// Optional defaults at ~/.config/mkical/config.toml
///
/// Every key can be overridden by the matching command-line flag.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub name: Option<String>,
    pub months: Option<i64>,
    pub dom: Option<i64>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub alarm_minutes: Option<u32>,
    pub uid_domain: Option<String>,
}

impl FileConfig {
    pub fn config_path() -> MkicalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MkicalError::Config("Could not determine config directory".into()))?
            .join("mkical");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// missing the built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> MkicalResult<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::config_path() {
                Ok(p) => (p, false),
                Err(e) => {
                    debug!("{e}, using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using built-in defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            MkicalError::Config(format!("Could not read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded config file");

        Self::parse(&content)
            .map_err(|e| MkicalError::Config(format!("{}: {e}", path.display())))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Effective settings after merging flags, config file and defaults.
///
/// Range checks on `months` and `dom`, and parsing of `start`, happen later
/// when the countdown is generated, so that flag and file values are
/// validated the same way and in a fixed order.
#[derive(Debug, Clone)]
pub struct Settings {
    pub name: String,
    pub months: i64,
    pub dom: i64,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: Option<String>,
    pub timezone: Option<Tz>,
    pub alarm_minutes: Option<u32>,
    pub uid_domain: String,
}

impl Settings {
    pub fn resolve(cli: Cli, file: FileConfig) -> MkicalResult<Self> {
        let timezone = cli
            .timezone
            .or(file.timezone)
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| MkicalError::Config(format!("Unknown timezone '{name}'")))
            })
            .transpose()?;

        Ok(Settings {
            name: cli
                .name
                .or(file.name)
                .unwrap_or_else(|| DEFAULT_CALENDAR_NAME.to_string()),
            months: cli.months.or(file.months).unwrap_or(DEFAULT_MONTHS),
            dom: cli.dom.or(file.dom).unwrap_or(0),
            summary: cli
                .summary
                .or(file.summary)
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            description: cli.desctmpl.or(file.description).unwrap_or_default(),
            location: cli
                .location
                .or(file.location)
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            start: cli.start,
            timezone,
            alarm_minutes: cli.alarm.or(file.alarm_minutes),
            uid_domain: cli
                .uid_domain
                .or(file.uid_domain)
                .unwrap_or_else(|| DEFAULT_UID_DOMAIN.to_string()),
        })
    }
}
