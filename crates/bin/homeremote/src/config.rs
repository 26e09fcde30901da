//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `homeremote.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use homeremote_app::loader::ThermostatSettings;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Thermostat button settings.
    pub thermostat: ThermostatConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Step sizes for the thermostat setpoint buttons.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThermostatConfig {
    /// Degrees added by the increase button.
    pub increment: f64,
    /// Ceiling applied by the increase button.
    pub max_temperature: f64,
    /// Degrees removed by the decrease button.
    pub decrement: f64,
}

impl Config {
    /// Load configuration from `homeremote.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homeremote.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
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

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HOMEREMOTE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        let number = |key: &str| var(key).and_then(|v| v.parse::<f64>().ok());
        if let Some(val) = number("HOMEREMOTE_THERMOSTAT_INCREMENT") {
            self.thermostat.increment = val;
        }
        if let Some(val) = number("HOMEREMOTE_THERMOSTAT_MAX") {
            self.thermostat.max_temperature = val;
        }
        if let Some(val) = number("HOMEREMOTE_THERMOSTAT_DECREMENT") {
            self.thermostat.decrement = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Validation(format!(
                    "thermostat.{name} must be a positive number, got {value}"
                )))
            }
        };
        positive("increment", self.thermostat.increment)?;
        positive("max_temperature", self.thermostat.max_temperature)?;
        positive("decrement", self.thermostat.decrement)?;
        Ok(())
    }

    /// Thermostat settings for the home wiring.
    #[must_use]
    pub fn thermostat_settings(&self) -> ThermostatSettings {
        ThermostatSettings {
            increment: self.thermostat.increment,
            max_temperature: self.thermostat.max_temperature,
            decrement: self.thermostat.decrement,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        let defaults = ThermostatSettings::default();
        Self {
            increment: defaults.increment,
            max_temperature: defaults.max_temperature,
            decrement: defaults.decrement,
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
