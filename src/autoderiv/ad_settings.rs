//! Settings of the automatic differentiation module.
//!
//! They can be written in a small toml document:
//! ```toml
//! approx_tol = 1e-8      # multiplier of the magnitude scale in deriv_approx_eq
//! loglevel = "warn"      # debug, info, warn, error, off/none
//! log_to_file = false    # also write log_<date>.txt
//! ```
use crate::Utils::logger::init_logger;
use crate::autoderiv::ad_errors::ADError;
use log::warn;

const KNOWN_KEYS: [&str; 3] = ["approx_tol", "loglevel", "log_to_file"];
const LOG_LEVELS: [&str; 6] = ["debug", "info", "warn", "error", "off", "none"];

#[derive(Debug, Clone, PartialEq)]
pub struct ADSettings {
    pub approx_tol: f64,
    pub loglevel: Option<String>,
    pub log_to_file: bool,
}

impl Default for ADSettings {
    fn default() -> Self {
        ADSettings {
            approx_tol: 1.0,
            loglevel: None,
            log_to_file: false,
        }
    }
}

impl ADSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(document: &str) -> Result<ADSettings, ADError> {
        let table: toml::Table = toml::from_str(document)
            .map_err(|e| ADError::ConfigError(format!("malformed settings: {}", e)))?;
        let mut settings = ADSettings::default();
        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!("unknown settings key '{}' ignored", key);
            }
        }
        if let Some(value) = table.get("approx_tol") {
            let tol = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| {
                    ADError::ConfigError(format!("approx_tol must be a number, got {}", value))
                })?;
            if !(tol > 0.0) {
                return Err(ADError::ConfigError(format!(
                    "approx_tol must be positive, got {}",
                    tol
                )));
            }
            settings.approx_tol = tol;
        }
        if let Some(value) = table.get("loglevel") {
            let level = value.as_str().ok_or_else(|| {
                ADError::ConfigError(format!("loglevel must be a string, got {}", value))
            })?;
            if !LOG_LEVELS.contains(&level) {
                return Err(ADError::ConfigError(format!(
                    "loglevel must be debug, info, warn, error or off, got {}",
                    level
                )));
            }
            settings.loglevel = Some(level.to_string());
        }
        if let Some(value) = table.get("log_to_file") {
            settings.log_to_file = value.as_bool().ok_or_else(|| {
                ADError::ConfigError(format!("log_to_file must be true or false, got {}", value))
            })?;
        }
        Ok(settings)
    }

    /// installs the logger described by these settings
    pub fn init_logging(&self) -> Result<bool, ADError> {
        init_logger(self.loglevel.as_deref(), self.log_to_file)
    }
}
