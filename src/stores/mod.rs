// ABOUTME: Storage abstraction for health records and reminders
// ABOUTME: Async store traits with in-memory and JSON file backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{HealthRecord, Priority, Recurrence, Reminder, ReminderCategory, ReminderTime};

/// JSON files under a data directory
pub mod json_file;
/// Process-local store
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// Source and sink of health records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record, newest entry first
    async fn records(&self) -> AppResult<Vec<HealthRecord>>;

    /// Add a record in front of the existing ones
    ///
    /// Fails with `ResourceAlreadyExists` when the id is taken.
    async fn add_record(&self, record: HealthRecord) -> AppResult<()>;
}

/// Source and sink of reminders
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Every reminder, newest entry first
    async fn reminders(&self) -> AppResult<Vec<Reminder>>;

    /// Add a reminder in front of the existing ones
    ///
    /// Fails with `ResourceAlreadyExists` when the id is taken.
    async fn add_reminder(&self, reminder: Reminder) -> AppResult<()>;

    /// Apply a patch and return the updated reminder
    ///
    /// Fails with `ResourceNotFound` for an unknown id.
    async fn update_reminder(&self, id: &str, patch: ReminderPatch) -> AppResult<Reminder>;

    /// Remove a reminder and return it
    ///
    /// Fails with `ResourceNotFound` for an unknown id.
    async fn delete_reminder(&self, id: &str) -> AppResult<Reminder>;
}

/// Partial reminder update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    /// New title
    pub title: Option<String>,
    /// New time of day
    pub time: Option<ReminderTime>,
    /// New recurrence
    pub recurrence: Option<Recurrence>,
    /// New category
    pub category: Option<ReminderCategory>,
    /// New enabled flag
    pub enabled: Option<bool>,
    /// New completed flag
    pub completed: Option<bool>,
    /// New priority
    pub priority: Option<Priority>,
    /// New notes; `Some(None)` clears them, JSON `null` included
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub notes: Option<Option<String>>,
}

/// A present field, `null` included, becomes `Some`; an absent one stays `None` via `default`
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ReminderPatch {
    /// Patch that only sets `completed`
    #[must_use]
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Patch that only sets `enabled`
    #[must_use]
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    /// Whether applying the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.time.is_none()
            && self.recurrence.is_none()
            && self.category.is_none()
            && self.enabled.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.notes.is_none()
    }

    /// Write the set fields onto `reminder`
    pub fn apply(self, reminder: &mut Reminder) {
        if let Some(title) = self.title {
            reminder.title = title;
        }
        if let Some(time) = self.time {
            reminder.time = time;
        }
        if let Some(recurrence) = self.recurrence {
            reminder.recurrence = recurrence;
        }
        if let Some(category) = self.category {
            reminder.category = category;
        }
        if let Some(enabled) = self.enabled {
            reminder.enabled = enabled;
        }
        if let Some(completed) = self.completed {
            reminder.completed = completed;
        }
        if let Some(priority) = self.priority {
            reminder.priority = priority;
        }
        if let Some(notes) = self.notes {
            reminder.notes = notes;
        }
    }
}

pub(crate) fn prepend_record(
    records: &mut Vec<HealthRecord>,
    record: HealthRecord,
) -> AppResult<()> {
    if records.iter().any(|existing| existing.id == record.id) {
        return Err(AppError::already_exists(format!("Health record {}", record.id)));
    }
    records.insert(0, record);
    Ok(())
}

pub(crate) fn prepend_reminder(reminders: &mut Vec<Reminder>, reminder: Reminder) -> AppResult<()> {
    if reminders.iter().any(|existing| existing.id == reminder.id) {
        return Err(AppError::already_exists(format!("Reminder {}", reminder.id)));
    }
    reminders.insert(0, reminder);
    Ok(())
}

pub(crate) fn patch_reminder(
    reminders: &mut [Reminder],
    id: &str,
    patch: ReminderPatch,
) -> AppResult<Reminder> {
    let reminder = reminders
        .iter_mut()
        .find(|reminder| reminder.id == id)
        .ok_or_else(|| AppError::not_found(format!("Reminder {id}")))?;
    patch.apply(reminder);
    Ok(reminder.clone())
}

pub(crate) fn remove_reminder(reminders: &mut Vec<Reminder>, id: &str) -> AppResult<Reminder> {
    let position = reminders
        .iter()
        .position(|reminder| reminder.id == id)
        .ok_or_else(|| AppError::not_found(format!("Reminder {id}")))?;
    Ok(reminders.remove(position))
}
