// ABOUTME: Environment configuration for the data directory, dashboard defaults, and log level
// ABOUTME: Reads PAWTRACK_* variables, applies defaults, and validates accepted ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! Environment-based configuration

use crate::constants::{env_config, limits, schedule, stats, storage};
use crate::errors::{AppError, ErrorCode};
use crate::intelligence::TimeWindow;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that does not parse
    #[error("Invalid value for {var}: {value}")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },

    /// A value parsed but falls outside the accepted range
    #[error("Value out of range for {var}: {value} (expected {min}..={max})")]
    ValueOutOfRange {
        /// Variable name
        var: &'static str,
        /// Parsed value
        value: u64,
        /// Lower bound
        min: u64,
        /// Upper bound
        max: u64,
    },

    /// No data directory was given and the platform has none
    #[error("No data directory available; set {0}")]
    MissingDataDir(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::MissingDataDir(_) => ErrorCode::ConfigError,
            ConfigError::Parse { .. } | ConfigError::ValueOutOfRange { .. } => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string())
    }
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }

    /// One step more verbose per `-v` occurrence
    #[must_use]
    pub const fn raised_by(self, steps: u8) -> Self {
        let mut level = self;
        let mut remaining = steps;
        while remaining > 0 {
            level = match level {
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
            remaining -= 1;
        }
        level
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PawtrackConfig {
    /// Directory holding the JSON stores
    pub data_dir: PathBuf,
    /// Window the health dashboard opens on
    pub default_window: TimeWindow,
    /// Horizon of the upcoming tab, in days
    pub upcoming_days: u32,
    /// Number of symptoms in the frequency chart
    pub top_symptoms: usize,
    /// Application log level
    pub log_level: LogLevel,
}

impl PawtrackConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable does not parse, a value is out of
    /// range, or no data directory can be determined
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var(env_config::DATA_DIR) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir()
                .map(|dir| dir.join(storage::APP_DIR))
                .ok_or(ConfigError::MissingDataDir(env_config::DATA_DIR))?,
        };

        let default_window = match env::var(env_config::DEFAULT_WINDOW) {
            Ok(code) => TimeWindow::from_str(&code).map_err(|_| ConfigError::Parse {
                var: env_config::DEFAULT_WINDOW,
                value: code,
            })?,
            Err(_) => TimeWindow::default(),
        };

        let config = Self {
            data_dir,
            default_window,
            upcoming_days: parse_var(env_config::UPCOMING_DAYS, schedule::DEFAULT_UPCOMING_DAYS)?,
            top_symptoms: parse_var(env_config::TOP_SYMPTOMS, stats::DEFAULT_TOP_SYMPTOMS)?,
            log_level: env::var(env_config::LOG_LEVEL)
                .map(|level| LogLevel::from_str_or_default(&level))
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Emit the loaded values as one debug event; call once logging is up
    pub fn log_loaded(&self) {
        debug!(
            data_dir = %self.data_dir.display(),
            window = %self.default_window,
            upcoming_days = self.upcoming_days,
            top_symptoms = self.top_symptoms,
            log_level = %self.log_level,
            "Configuration loaded"
        );
    }

    /// Configuration rooted at `data_dir` with every other value at its default
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            default_window: TimeWindow::default(),
            upcoming_days: schedule::DEFAULT_UPCOMING_DAYS,
            top_symptoms: stats::DEFAULT_TOP_SYMPTOMS,
            log_level: LogLevel::default(),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for an upcoming horizon or symptom chart size
    /// outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            env_config::UPCOMING_DAYS,
            u64::from(self.upcoming_days),
            1,
            u64::from(limits::MAX_UPCOMING_DAYS),
        )?;
        check_range(
            env_config::TOP_SYMPTOMS,
            self.top_symptoms as u64,
            1,
            limits::MAX_TOP_SYMPTOMS as u64,
        )?;

        if self.data_dir.is_file() {
            warn!(
                data_dir = %self.data_dir.display(),
                "Data directory points at a file"
            );
        }
        Ok(())
    }

    /// Human readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pawtrack Configuration:\n\
             - Data Directory: {}\n\
             - Default Window: {}\n\
             - Upcoming Days: {}\n\
             - Top Symptoms: {}\n\
             - Log Level: {}",
            self.data_dir.display(),
            self.default_window,
            self.upcoming_days,
            self.top_symptoms,
            self.log_level,
        )
    }
}

fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Parse { var, value: raw }),
        Err(_) => Ok(default),
    }
}

const fn check_range(var: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::ValueOutOfRange {
            var,
            value,
            min,
            max,
        });
    }
    Ok(())
}
