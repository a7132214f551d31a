// ABOUTME: Serializable view state for the daily scheduler
// ABOUTME: Active tab, calendar selection, and upcoming horizon driven by a pure reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::schedule::DEFAULT_UPCOMING_DAYS;
use crate::errors::AppError;
use crate::models::Reminder;
use crate::scheduling::{ScheduleContext, ScheduleResolver, TimeGroup};

/// Scheduler tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleTab {
    /// Today's reminders
    #[default]
    Today,
    /// Tomorrow's reminders
    Tomorrow,
    /// One-time reminders in the coming days
    Upcoming,
    /// Reminders for the date picked on the calendar
    Calendar,
}

impl FromStr for ScheduleTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "upcoming" => Ok(Self::Upcoming),
            "calendar" | "date" => Ok(Self::Calendar),
            _ => Err(AppError::invalid_format(format!("Unknown schedule tab: {s}"))),
        }
    }
}

impl fmt::Display for ScheduleTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::Upcoming => "upcoming",
            Self::Calendar => "calendar",
        })
    }
}

/// Everything the scheduler remembers between renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerViewState {
    /// Active tab
    pub tab: ScheduleTab,
    /// Date picked on the calendar tab
    pub selected_date: NaiveDate,
    /// Horizon of the upcoming tab, in days
    pub upcoming_days: u32,
}

/// User interactions on the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SchedulerAction {
    /// Switch tab
    SelectTab(ScheduleTab),
    /// Pick a calendar date
    SelectDate(NaiveDate),
    /// Move the calendar selection by a number of days
    ShiftSelectedDate(i64),
}

impl SchedulerViewState {
    /// Initial state: today's tab with the calendar on `today`
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            tab: ScheduleTab::Today,
            selected_date: today,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
        }
    }

    /// Override the upcoming horizon
    #[must_use]
    pub const fn with_upcoming_days(mut self, days: u32) -> Self {
        self.upcoming_days = days;
        self
    }

    /// Apply an action, returning the next state
    ///
    /// Shifting past the representable calendar leaves the selection unchanged.
    #[must_use]
    pub fn reduce(self, action: SchedulerAction) -> Self {
        match action {
            SchedulerAction::SelectTab(tab) => Self { tab, ..self },
            SchedulerAction::SelectDate(selected_date) => Self {
                selected_date,
                ..self
            },
            SchedulerAction::ShiftSelectedDate(offset) => {
                let days = Days::new(offset.unsigned_abs());
                let shifted = if offset >= 0 {
                    self.selected_date.checked_add_days(days)
                } else {
                    self.selected_date.checked_sub_days(days)
                };
                Self {
                    selected_date: shifted.unwrap_or(self.selected_date),
                    ..self
                }
            }
        }
    }

    /// Schedule context shown by the active tab
    #[must_use]
    pub const fn context(&self) -> ScheduleContext {
        match self.tab {
            ScheduleTab::Today => ScheduleContext::Today,
            ScheduleTab::Tomorrow => ScheduleContext::Tomorrow,
            ScheduleTab::Upcoming => ScheduleContext::UpcomingWithinDays(self.upcoming_days),
            ScheduleTab::Calendar => ScheduleContext::OnDate(self.selected_date),
        }
    }

    /// Reminders for the active tab, grouped by time of day
    #[must_use]
    pub fn time_groups<'a>(
        &self,
        reminders: &'a [Reminder],
        today: NaiveDate,
    ) -> Vec<TimeGroup<'a>> {
        ScheduleResolver::group_by_time(ScheduleResolver::resolve_active_reminders(
            reminders,
            self.context(),
            today,
        ))
    }
}
