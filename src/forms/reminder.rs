// ABOUTME: Draft state for the add-reminder dialog
// ABOUTME: Recurring vs one-time selection, day picker, and validation into a Reminder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::health_record::non_blank;
use crate::errors::{AppError, AppResult};
use crate::models::{
    new_id, DayOfWeek, Priority, Recurrence, Reminder, ReminderCategory, ReminderTime,
};

/// Values entered in the add-reminder dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDraft {
    /// Title
    pub title: String,
    /// Time of day
    pub time: ReminderTime,
    /// Recurring on weekdays (true) or once on `date` (false)
    pub recurring: bool,
    /// Days for a recurring reminder
    pub days: BTreeSet<DayOfWeek>,
    /// Date for a one-time reminder
    pub date: Option<NaiveDate>,
    /// Category
    pub category: ReminderCategory,
    /// Priority
    pub priority: Priority,
    /// Free-form notes
    pub notes: String,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            time: ReminderTime::default(),
            recurring: true,
            days: DayOfWeek::ALL.into_iter().collect(),
            date: None,
            category: ReminderCategory::Feeding,
            priority: Priority::Medium,
            notes: String::new(),
        }
    }
}

impl ReminderDraft {
    /// Start a draft with the given title and the dialog's defaults
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Select the day if unselected, deselect it otherwise
    pub fn toggle_day(&mut self, day: DayOfWeek) {
        if !self.days.remove(&day) {
            self.days.insert(day);
        }
    }

    /// Switch to a one-time reminder on `date`
    pub fn set_one_time(&mut self, date: NaiveDate) {
        self.recurring = false;
        self.date = Some(date);
    }

    /// Validate the draft and turn it into an enabled reminder with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank title or a one-time reminder
    /// without a date, and `InvalidInput` for a recurring reminder with no days
    pub fn build(&self) -> AppResult<Reminder> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::missing_field("title"));
        }

        let recurrence = if self.recurring {
            if self.days.is_empty() {
                return Err(AppError::invalid_input(
                    "A recurring reminder needs at least one day",
                ));
            }
            Recurrence::Weekly {
                days: self.days.clone(),
            }
        } else {
            let date = self.date.ok_or_else(|| AppError::missing_field("date"))?;
            Recurrence::once(date)
        };

        Ok(Reminder {
            id: new_id(),
            title: title.to_owned(),
            time: self.time,
            recurrence,
            category: self.category,
            enabled: true,
            completed: false,
            priority: self.priority,
            notes: non_blank(&self.notes),
        })
    }
}
