// ABOUTME: Constant re-exports from pawtrack-core
// ABOUTME: Reference ranges, window lengths, scheduler defaults, and form limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

pub use pawtrack_core::constants::*;

/// Environment variable names read by configuration
pub mod env_config {
    /// Directory holding `records.json` and `reminders.json`
    pub const DATA_DIR: &str = "PAWTRACK_DATA_DIR";
    /// Default dashboard window code
    pub const DEFAULT_WINDOW: &str = "PAWTRACK_DEFAULT_WINDOW";
    /// Horizon of the upcoming tab, in days
    pub const UPCOMING_DAYS: &str = "PAWTRACK_UPCOMING_DAYS";
    /// Number of symptoms in the frequency chart
    pub const TOP_SYMPTOMS: &str = "PAWTRACK_TOP_SYMPTOMS";
    /// Application log level
    pub const LOG_LEVEL: &str = "PAWTRACK_LOG_LEVEL";
}

/// Accepted configuration ranges
pub mod limits {
    /// Longest upcoming horizon, in days
    pub const MAX_UPCOMING_DAYS: u32 = 365;
    /// Largest symptom chart
    pub const MAX_TOP_SYMPTOMS: usize = 50;
}

/// Store file names
pub mod storage {
    /// Data directory name under the platform data dir
    pub const APP_DIR: &str = "pawtrack";
    /// Health record file
    pub const RECORDS_FILE: &str = "records.json";
    /// Reminder file
    pub const REMINDERS_FILE: &str = "reminders.json";
}
