//! Scheduler configuration.
//!
//! Configuration is a TOML document; every key is optional:
//!
//! ```toml
//! country = "AE"
//! weekend = ["Sat", "Sun"]
//! holiday_api_base_url = "https://date.nager.at/api/v3"
//!
//! [[templates]]
//! id = 1
//! name = "Concept design"
//! department = "Architecture"
//! duration = 3
//! fixed_time = 2
//! dependencies = []
//! ```

use crate::calendar::{
    adapters::nager::{DEFAULT_BASE_URL, NagerHolidaySource},
    domain::{CalendarError, CountryCode, HolidaySet, Weekend, WorkingCalendar},
};
use crate::scrum::{domain::TemplateCatalog, services::ScheduleSettings};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Country whose holidays apply when none is configured.
pub const DEFAULT_COUNTRY: &str = "AE";

/// Errors raised while loading or interpreting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Read {
        /// File that was requested.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[source] Box<toml::de::Error>),
    /// A weekend entry is not a weekday name.
    #[error("unknown weekday '{0}'")]
    InvalidWeekday(String),
    /// Country or weekend values were rejected.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Scheduler settings read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// ISO 3166-1 alpha-2 country for public holidays.
    pub country: String,
    /// Weekday names treated as non-working, e.g. `"Fri"` or `"Saturday"`.
    pub weekend: Vec<String>,
    /// Root of the Nager.Date compatible holiday API.
    pub holiday_api_base_url: String,
    /// Standard tasks seeded onto new boards.
    pub templates: TemplateCatalog,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_owned(),
            weekend: vec!["Sat".to_owned(), "Sun".to_owned()],
            holiday_api_base_url: DEFAULT_BASE_URL.to_owned(),
            templates: TemplateCatalog::default(),
        }
    }
}

impl SchedulerConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|err| ConfigError::Parse(Box::new(err)))
    }

    /// Reads and parses `path` relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn load(dir: &Dir, path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = dir.read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(%path, templates = config.templates.len(), "loaded scheduler configuration");
        Ok(config)
    }

    /// Reads a configuration file using ambient authority.
    ///
    /// # Errors
    ///
    /// As for [`SchedulerConfig::load`].
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let read_error = |source| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path has no file name")))?;
        Self::load(&dir, Utf8Path::new(file_name))
    }

    /// Validated holiday country.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Calendar`] for anything but two ASCII letters.
    pub fn country_code(&self) -> Result<CountryCode, ConfigError> {
        Ok(CountryCode::new(self.country.as_str())?)
    }

    /// Weekend days as a [`Weekend`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWeekday`] for an unknown name and
    /// [`ConfigError::Calendar`] when every day of the week is listed.
    pub fn weekend(&self) -> Result<Weekend, ConfigError> {
        let days = self
            .weekend
            .iter()
            .map(|name| {
                name.trim()
                    .parse::<Weekday>()
                    .map_err(|_| ConfigError::InvalidWeekday(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let weekend = Weekend::from_days(days);
        WorkingCalendar::new(weekend, HolidaySet::new())?;
        Ok(weekend)
    }

    /// Country and weekend for the scheduling service.
    ///
    /// # Errors
    ///
    /// As for [`SchedulerConfig::country_code`] and
    /// [`SchedulerConfig::weekend`].
    pub fn schedule_settings(&self) -> Result<ScheduleSettings, ConfigError> {
        Ok(ScheduleSettings::new(self.country_code()?, self.weekend()?))
    }

    /// Holiday client pointed at the configured API root.
    #[must_use]
    pub fn holiday_source(&self) -> NagerHolidaySource {
        NagerHolidaySource::new(self.holiday_api_base_url.as_str())
    }

    /// Template catalog for seeding boards.
    #[must_use]
    pub fn template_catalog(&self) -> TemplateCatalog {
        self.templates.clone()
    }
}
