// ABOUTME: Integration tests for the health record and reminder form drafts
// ABOUTME: Symptom selection, range validation, and reminder recurrence building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDateTime;
use common::date;
use pawtrack::errors::ErrorCode;
use pawtrack::forms::{HealthRecordDraft, ReminderDraft};
use pawtrack::models::{DayOfWeek, Recurrence, ReminderCategory};

fn morning() -> NaiveDateTime {
    date(2024, 3, 12).and_hms_opt(8, 30, 0).unwrap()
}

#[test]
fn test_default_health_draft_builds_a_record() {
    let record = HealthRecordDraft::new(morning()).build().unwrap();

    assert!(!record.id.is_empty());
    assert_eq!(record.date, morning().and_utc());
    assert_eq!(record.heart_rate, Some(80));
    assert_eq!(record.medication_taken, Some(false));
    assert!(record.medication_details.is_none());
    assert!(record.notes.is_none());
}

#[test]
fn test_toggle_symptom_selects_then_deselects() {
    let mut draft = HealthRecordDraft::new(morning());
    draft.toggle_symptom("coughing");
    draft.toggle_symptom("sneezing");
    draft.toggle_symptom("coughing");

    assert_eq!(draft.symptoms, vec!["sneezing"]);
}

#[test]
fn test_custom_symptom_gets_slug_tag_once() {
    let mut draft = HealthRecordDraft::new(morning());

    let tag = draft.add_custom_symptom("  Red Eyes! ").unwrap();
    let again = draft.add_custom_symptom("red eyes").unwrap();

    assert_eq!(tag, "custom-red-eyes");
    assert_eq!(again, tag);
    assert_eq!(draft.symptoms, vec!["custom-red-eyes"]);
    assert!(draft.add_custom_symptom("   ").is_none());
}

#[test]
fn test_out_of_range_vitals_are_rejected() {
    let mut draft = HealthRecordDraft::new(morning());
    draft.weight = 0.5;
    let error = draft.build().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "weight");

    let mut draft = HealthRecordDraft::new(morning());
    draft.temperature = 43.0;
    assert_eq!(draft.build().unwrap_err().details["field"], "temperature");

    let mut draft = HealthRecordDraft::new(morning());
    draft.heart_rate = Some(200);
    assert_eq!(draft.build().unwrap_err().details["field"], "heartRate");
}

#[test]
fn test_missing_heart_rate_is_accepted() {
    let mut draft = HealthRecordDraft::new(morning());
    draft.heart_rate = None;
    assert_eq!(draft.build().unwrap().heart_rate, None);
}

#[test]
fn test_medication_details_kept_only_when_taken() {
    let mut draft = HealthRecordDraft::new(morning());
    draft.medication_details = "Carprofen 25mg".to_owned();
    assert!(draft.build().unwrap().medication_details.is_none());

    draft.medication_taken = true;
    assert_eq!(
        draft.build().unwrap().medication_details.as_deref(),
        Some("Carprofen 25mg")
    );
}

#[test]
fn test_default_reminder_draft_recurs_every_day() {
    let reminder = ReminderDraft::titled("Breakfast").build().unwrap();

    assert_eq!(reminder.recurrence, Recurrence::every_day());
    assert_eq!(reminder.time.to_string(), "08:00");
    assert_eq!(reminder.category, ReminderCategory::Feeding);
    assert!(reminder.enabled);
    assert!(!reminder.completed);
}

#[test]
fn test_reminder_draft_requires_title() {
    let error = ReminderDraft::titled("   ").build().unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_recurring_reminder_requires_a_day() {
    let mut draft = ReminderDraft::titled("Walk");
    for day in DayOfWeek::ALL {
        draft.toggle_day(day);
    }
    assert!(draft.days.is_empty());
    assert_eq!(draft.build().unwrap_err().code, ErrorCode::InvalidInput);

    draft.toggle_day(DayOfWeek::Sat);
    assert_eq!(
        draft.build().unwrap().recurrence,
        Recurrence::weekly([DayOfWeek::Sat])
    );
}

#[test]
fn test_one_time_reminder_requires_a_date() {
    let mut draft = ReminderDraft::titled("Vet visit");
    draft.recurring = false;
    assert_eq!(
        draft.build().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );

    draft.set_one_time(date(2024, 4, 2));
    let reminder = draft.build().unwrap();
    assert_eq!(reminder.recurrence, Recurrence::once(date(2024, 4, 2)));
    assert!(!reminder.recurrence.is_recurring());
}

#[test]
fn test_built_reminders_get_distinct_ids() {
    let draft = ReminderDraft::titled("Brush");
    assert_ne!(draft.build().unwrap().id, draft.build().unwrap().id);
}
