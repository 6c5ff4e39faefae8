//! Engine configuration: the shift schedule, the session-to-hours
//! convention, the KPI target, and the low-utilization threshold.
//! All of these are injected values, never literals inside the engine.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::ShiftSchedule;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ShiftSchedule,
    /// Hours attributed to one recorded session (one login). The per-hour
    /// metric divides by `session_count * session_hours`; the default 1.0
    /// makes one row count as one hour on the clock.
    #[serde(default = "default_session_hours")]
    pub session_hours: f64,
    /// Items-per-hour throughput target used by the KPI comparator.
    #[serde(default = "default_kpi_target")]
    pub kpi_target: f64,
    /// Flag operator/day pairs with at most this many sessions.
    #[serde(default = "default_low_utilization")]
    pub low_utilization_threshold: u64,
}

fn default_session_hours() -> f64 {
    1.0
}
fn default_kpi_target() -> f64 {
    130.0
}
fn default_low_utilization() -> u64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ShiftSchedule::default(),
            session_hours: default_session_hours(),
            kpi_target: default_kpi_target(),
            low_utilization_threshold: default_low_utilization(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftmetrics")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftmetrics")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftmetrics.conf")
    }

    /// Load configuration from the given path (or the standard location),
    /// falling back to defaults when no file exists.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else if custom.is_some() {
            // An explicitly requested file must exist.
            Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the default configuration file, creating the directory.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }

    /// Fatal checks, run before any computation starts. A zero ratio
    /// denominator or a broken schedule must never reach the engine.
    pub fn validate(&self) -> AppResult<()> {
        self.schedule.validate()?;
        if !(self.session_hours > 0.0) {
            return Err(AppError::Config(format!(
                "session_hours must be positive, got {}",
                self.session_hours
            )));
        }
        if self.kpi_target < 0.0 {
            return Err(AppError::Config(format!(
                "kpi_target must not be negative, got {}",
                self.kpi_target
            )));
        }
        Ok(())
    }
}
