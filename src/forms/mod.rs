// ABOUTME: Form drafts for new health records and reminders
// ABOUTME: Hold in-progress input and validate it into immutable domain values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

/// Health entry form
pub mod health_record;
/// Add-reminder dialog
pub mod reminder;

pub use health_record::HealthRecordDraft;
pub use reminder::ReminderDraft;
