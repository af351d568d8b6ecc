//! Configuration loading — TOML file with environment variable
//! overrides.
//!
//! Looks for `holibot.toml` in the working directory. Credentials and
//! target program names have no usable defaults and are validated for
//! presence; everything else falls back to sensible values.
//! Environment variables take precedence over file values.

use chrono::NaiveTime;
use serde::Deserialize;

use holibot_adapter_holiday_http::DEFAULT_BASE_URL;
use holibot_adapter_hub_ws::HubConfig;
use holibot_domain::program::ProgramMatcher;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hub connection settings.
    pub hub: HubConfig,
    /// Holiday service settings.
    pub holiday: HolidayConfig,
    /// The two target program names.
    pub programs: ProgramsConfig,
    /// Daily run window.
    pub schedule: ScheduleConfig,
    /// Monitoring heartbeat.
    pub heartbeat: HeartbeatConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Holiday service configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    /// Region code used for county-restricted holidays (e.g. `DE-NW`).
    pub region: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Holiday service base URL.
    pub base_url: String,
}

/// Names of the two mutually exclusive morning programs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProgramsConfig {
    /// Plain spelling of the everyday program.
    pub normal: String,
    /// Explicit encoded spelling; derived from `normal` when absent.
    pub normal_encoded: Option<String>,
    /// Plain spelling of the vacation program.
    pub vacation: String,
    /// Explicit encoded spelling; derived from `vacation` when absent.
    pub vacation_encoded: Option<String>,
}

impl ProgramsConfig {
    /// Matcher for the everyday program.
    #[must_use]
    pub fn normal_matcher(&self) -> ProgramMatcher {
        matcher(&self.normal, self.normal_encoded.as_deref())
    }

    /// Matcher for the vacation program.
    #[must_use]
    pub fn vacation_matcher(&self) -> ProgramMatcher {
        matcher(&self.vacation, self.vacation_encoded.as_deref())
    }
}

fn matcher(plain: &str, encoded: Option<&str>) -> ProgramMatcher {
    match encoded {
        Some(encoded) => ProgramMatcher::with_encoded(plain, encoded),
        None => ProgramMatcher::new(plain),
    }
}

/// Daily run window configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Window start, `HH:MM` local time.
    pub window_start: String,
    /// Window end (exclusive), `HH:MM` local time.
    pub window_end: String,
    /// Scheduling poll interval in seconds.
    pub poll_secs: u64,
}

impl ScheduleConfig {
    /// Parse the configured window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for unparsable times or an
    /// empty window.
    pub fn window(&self) -> Result<(NaiveTime, NaiveTime), ConfigError> {
        let start = parse_time(&self.window_start)?;
        let end = parse_time(&self.window_end)?;
        if start >= end {
            return Err(ConfigError::Validation(format!(
                "schedule window is empty: {} >= {}",
                self.window_start, self.window_end
            )));
        }
        Ok((start, end))
    }
}

fn parse_time(text: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(text, "%H:%M")
        .map_err(|_| ConfigError::Validation(format!("invalid time of day: {text}")))
}

/// Monitoring heartbeat configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// URL to GET after each scheduling tick; disabled when absent.
    pub url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `holibot.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or
    /// if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("holibot.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOLIBOT_HUB_HOST") {
            self.hub.host = val;
        }
        if let Ok(val) = std::env::var("HOLIBOT_HUB_PORT") {
            if let Ok(port) = val.parse() {
                self.hub.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOLIBOT_HUB_USERNAME") {
            self.hub.username = val;
        }
        if let Ok(val) = std::env::var("HOLIBOT_HUB_PASSWORD") {
            self.hub.password = val;
        }
        if let Ok(val) = std::env::var("HOLIBOT_REGION") {
            self.holiday.region = val;
        }
        if let Ok(val) = std::env::var("HOLIBOT_HEARTBEAT_URL") {
            self.heartbeat.url = Some(val);
        }
        if let Ok(val) = std::env::var("HOLIBOT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("hub.host", &self.hub.host),
            ("hub.username", &self.hub.username),
            ("hub.password", &self.hub.password),
            ("programs.normal", &self.programs.normal),
            ("programs.vacation", &self.programs.vacation),
            ("holiday.region", &self.holiday.region),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{field} must be set")));
            }
        }
        if self.schedule.poll_secs == 0 {
            return Err(ConfigError::Validation(
                "schedule.poll_secs must be non-zero".to_string(),
            ));
        }
        self.schedule.window()?;
        Ok(())
    }
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            region: "DE-NW".to_string(),
            country: "DE".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            window_start: "00:05".to_string(),
            window_end: "00:10".to_string(),
            poll_secs: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
