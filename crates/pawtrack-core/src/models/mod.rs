// ABOUTME: Core data models for pet health tracking and care scheduling
// ABOUTME: Re-exports health record and reminder types plus identifier generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! # Data Models
//!
//! Records and reminders are owned by the caller's stores. The metrics and
//! scheduling engines only ever read them or derive new values from them.

/// Health check-in records and categorical observations
pub mod health_record;
/// Care reminders, recurrence, and time-of-day
pub mod reminder;

pub use health_record::{parse_check_in_date, Appetite, Behavior, HealthRecord, SleepQuality};
pub use reminder::{DayOfWeek, Priority, Recurrence, Reminder, ReminderCategory, ReminderTime};

/// Generate a fresh opaque identifier
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
