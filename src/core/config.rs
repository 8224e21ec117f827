//! TOML configuration for banner timing
//!
//! Applications tune the named `Short`/`Long` display windows through a
//! small TOML table, typically embedded in their own configuration file
//! under a `[banner]` section and handed over as a `toml::Table`.

use std::time::Duration;

/// Default display window for `DurationPolicy::Short`.
const DEFAULT_SHORT_MS: u64 = 1500;
/// Default display window for `DurationPolicy::Long`.
const DEFAULT_LONG_MS: u64 = 2750;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{key}' must be a positive number of milliseconds (got {value})")]
    InvalidDuration { key: &'static str, value: i64 },

    #[error("Invalid banner configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Timing configuration for the banner subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    short_duration: Duration,
    long_duration: Duration,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            short_duration: Duration::from_millis(DEFAULT_SHORT_MS),
            long_duration: Duration::from_millis(DEFAULT_LONG_MS),
        }
    }
}

impl BannerConfig {
    pub fn short_duration(&self) -> Duration {
        self.short_duration
    }

    pub fn long_duration(&self) -> Duration {
        self.long_duration
    }

    /// Apply TOML configuration values on top of the current settings.
    ///
    /// Unknown keys are ignored so the table can live inside a larger
    /// application config.
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ConfigError> {
        if let Some(ms) = config.get("short-duration-ms").and_then(|v| v.as_integer()) {
            self.short_duration = Self::duration_from_millis("short-duration-ms", ms)?;
        }
        if let Some(ms) = config.get("long-duration-ms").and_then(|v| v.as_integer()) {
            self.long_duration = Self::duration_from_millis("long-duration-ms", ms)?;
        }
        Ok(())
    }

    /// Parse a configuration from TOML text, starting from the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let table = toml::from_str::<toml::Table>(contents)?;
        let mut config = Self::default();
        config.apply_toml_values(&table)?;
        Ok(config)
    }

    fn duration_from_millis(key: &'static str, value: i64) -> Result<Duration, ConfigError> {
        if value <= 0 {
            return Err(ConfigError::InvalidDuration { key, value });
        }
        Ok(Duration::from_millis(value as u64))
    }
}
