// ABOUTME: Schedule view contexts that select which reminders are shown
// ABOUTME: Today, tomorrow, an upcoming horizon, or a specific calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which slice of the schedule is being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScheduleContext {
    /// The reference date
    Today,
    /// The day after the reference date
    Tomorrow,
    /// One-time reminders after tomorrow, up to `n` days past the reference
    UpcomingWithinDays(u32),
    /// A specific calendar date
    OnDate(NaiveDate),
}

impl ScheduleContext {
    /// Calendar date this context shows, `None` for the upcoming horizon
    #[must_use]
    pub fn resolve_date(self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(reference),
            Self::Tomorrow => reference.checked_add_days(Days::new(1)),
            Self::UpcomingWithinDays(_) => None,
            Self::OnDate(date) => Some(date),
        }
    }

    /// Exclusive lower bound (tomorrow) and inclusive upper bound
    /// (`reference + days`) of the upcoming horizon
    #[must_use]
    pub fn upcoming_bounds(reference: NaiveDate, days: u32) -> Option<(NaiveDate, NaiveDate)> {
        let tomorrow = reference.checked_add_days(Days::new(1))?;
        let horizon = reference.checked_add_days(Days::new(u64::from(days)))?;
        Some((tomorrow, horizon))
    }
}

impl fmt::Display for ScheduleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("today"),
            Self::Tomorrow => f.write_str("tomorrow"),
            Self::UpcomingWithinDays(days) => write!(f, "upcoming({days}d)"),
            Self::OnDate(date) => write!(f, "{date}"),
        }
    }
}
