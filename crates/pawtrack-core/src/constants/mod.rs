// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Veterinary reference ranges, trend thresholds, window lengths, and form limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! Constants grouped by the concern that reads them.

/// Fixed veterinary reference ranges used by anomaly detection
pub mod reference_ranges {
    /// Lowest normal body temperature (°C)
    pub const TEMPERATURE_MIN_C: f64 = 37.5;
    /// Highest normal body temperature (°C)
    pub const TEMPERATURE_MAX_C: f64 = 39.5;
    /// Lowest normal resting heart rate (bpm)
    pub const HEART_RATE_MIN_BPM: u32 = 60;
    /// Highest normal resting heart rate (bpm)
    pub const HEART_RATE_MAX_BPM: u32 = 140;
}

/// Metric statistics tuning
pub mod stats {
    /// Signed change beyond which a metric counts as trending
    pub const TREND_THRESHOLD: f64 = 0.5;
    /// Default number of symptoms shown in the frequency chart
    pub const DEFAULT_TOP_SYMPTOMS: usize = 5;
}

/// Time window lengths
pub mod windows {
    /// One week, in days
    pub const WEEK_DAYS: i64 = 7;
    /// One month, in calendar months
    pub const MONTH_MONTHS: u32 = 1;
    /// Three months, in calendar months
    pub const QUARTER_MONTHS: u32 = 3;
    /// One year, in calendar months
    pub const YEAR_MONTHS: u32 = 12;
}

/// Scheduler defaults
pub mod schedule {
    /// Horizon of the "upcoming" tab, in days
    pub const DEFAULT_UPCOMING_DAYS: u32 = 7;
    /// Time pre-filled on a new reminder
    pub const DEFAULT_REMINDER_TIME: &str = "08:00";
}

/// Accepted ranges on the health entry form
pub mod form_limits {
    /// Minimum weight (kg)
    pub const WEIGHT_MIN_KG: f64 = 1.0;
    /// Maximum weight (kg)
    pub const WEIGHT_MAX_KG: f64 = 80.0;
    /// Minimum temperature (°C)
    pub const TEMPERATURE_MIN_C: f64 = 35.0;
    /// Maximum temperature (°C)
    pub const TEMPERATURE_MAX_C: f64 = 42.0;
    /// Minimum heart rate (bpm)
    pub const HEART_RATE_MIN_BPM: u32 = 40;
    /// Maximum heart rate (bpm)
    pub const HEART_RATE_MAX_BPM: u32 = 180;
    /// Prefix for user-entered symptom tags
    pub const CUSTOM_SYMPTOM_PREFIX: &str = "custom-";
}

/// Service identity used by logging
pub mod service_names {
    /// Name reported in structured logs
    pub const PAWTRACK: &str = "pawtrack";
}
