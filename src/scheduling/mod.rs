// ABOUTME: Daily care schedule resolution for recurring and one-time reminders
// ABOUTME: Context selection, time-of-day grouping, and pure reminder toggles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! # Scheduling
//!
//! Decides which reminders show up on the today, tomorrow, upcoming and
//! calendar views, and groups them by time of day. Like the metrics engine,
//! everything here is a pure function of its arguments; "now" is always
//! passed in as a reference date.

/// Schedule view contexts
pub mod context;
/// Active reminder resolution and grouping
pub mod resolver;

pub use context::ScheduleContext;
pub use resolver::{ScheduleResolver, TimeGroup};
