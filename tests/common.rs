// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Record and reminder builders, fixed dates, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pawtrack`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pawtrack::models::{DayOfWeek, HealthRecord, Recurrence, Reminder, ReminderTime};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Midnight UTC on the given day
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Record with the given vitals and no heart rate
pub fn record(id: &str, at: DateTime<Utc>, weight: f64, temperature: f64) -> HealthRecord {
    HealthRecord::new(id, at, weight, temperature)
}

/// Record with every vital set
pub fn record_with_hr(
    id: &str,
    at: DateTime<Utc>,
    weight: f64,
    temperature: f64,
    bpm: u32,
) -> HealthRecord {
    HealthRecord::new(id, at, weight, temperature).with_heart_rate(bpm)
}

/// In-range record carrying the given symptom tags
pub fn record_with_symptoms(id: &str, at: DateTime<Utc>, symptoms: &[&str]) -> HealthRecord {
    HealthRecord::new(id, at, 30.0, 38.5).with_symptoms(symptoms.iter().copied())
}

/// Reminder recurring on the given days
pub fn weekly(id: &str, time: &str, days: &[DayOfWeek]) -> Reminder {
    Reminder::new(
        id,
        format!("Reminder {id}"),
        time.parse::<ReminderTime>().unwrap(),
        Recurrence::weekly(days.iter().copied()),
    )
}

/// Reminder recurring on every day
pub fn daily(id: &str, time: &str) -> Reminder {
    weekly(id, time, &DayOfWeek::ALL)
}

/// One-time reminder on `on`
pub fn once(id: &str, time: &str, on: NaiveDate) -> Reminder {
    Reminder::new(
        id,
        format!("Reminder {id}"),
        time.parse::<ReminderTime>().unwrap(),
        Recurrence::once(on),
    )
}
