// ABOUTME: Draft state for the daily health entry form
// ABOUTME: Symptom selection, range validation, and conversion into an immutable record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::form_limits::{
    CUSTOM_SYMPTOM_PREFIX, HEART_RATE_MAX_BPM, HEART_RATE_MIN_BPM, TEMPERATURE_MAX_C,
    TEMPERATURE_MIN_C, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use crate::errors::{AppError, AppResult};
use crate::models::{new_id, Appetite, Behavior, HealthRecord, SleepQuality};

/// Values entered on the health form before they become a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordDraft {
    /// When the check-in was taken
    pub taken_at: NaiveDateTime,
    /// Weight (kg)
    pub weight: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Heart rate (bpm), if measured
    pub heart_rate: Option<u32>,
    /// Selected symptom tags, in selection order
    pub symptoms: Vec<String>,
    /// Observed behavior
    pub behavior: Behavior,
    /// Observed appetite
    pub appetite: Appetite,
    /// Observed sleep quality
    pub sleep_quality: SleepQuality,
    /// Whether medication was given
    pub medication_taken: bool,
    /// What medication was given
    pub medication_details: String,
    /// Free-form notes
    pub notes: String,
}

impl HealthRecordDraft {
    /// A draft pre-filled with the form's starting values
    #[must_use]
    pub fn new(taken_at: NaiveDateTime) -> Self {
        Self {
            taken_at,
            weight: 32.5,
            temperature: 38.2,
            heart_rate: Some(80),
            symptoms: Vec::new(),
            behavior: Behavior::Normal,
            appetite: Appetite::Normal,
            sleep_quality: SleepQuality::Normal,
            medication_taken: false,
            medication_details: String::new(),
            notes: String::new(),
        }
    }

    /// Select the symptom if it is not selected, deselect it otherwise
    pub fn toggle_symptom(&mut self, tag: &str) {
        if let Some(position) = self.symptoms.iter().position(|s| s == tag) {
            self.symptoms.remove(position);
        } else {
            self.symptoms.push(tag.to_owned());
        }
    }

    /// Select a user-entered symptom, returning its tag
    ///
    /// Blank labels are ignored. A label that is already selected is not
    /// added twice.
    pub fn add_custom_symptom(&mut self, label: &str) -> Option<String> {
        let slug = slugify(label);
        if slug.is_empty() {
            return None;
        }

        let tag = format!("{CUSTOM_SYMPTOM_PREFIX}{slug}");
        if !self.symptoms.contains(&tag) {
            self.symptoms.push(tag.clone());
        }
        Some(tag)
    }

    /// Validate the draft and turn it into a record with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when weight, temperature or heart rate fall
    /// outside the form's accepted ranges
    pub fn build(&self) -> AppResult<HealthRecord> {
        check_range("weight", self.weight, WEIGHT_MIN_KG, WEIGHT_MAX_KG)?;
        check_range(
            "temperature",
            self.temperature,
            TEMPERATURE_MIN_C,
            TEMPERATURE_MAX_C,
        )?;
        if let Some(bpm) = self.heart_rate {
            check_range(
                "heartRate",
                f64::from(bpm),
                f64::from(HEART_RATE_MIN_BPM),
                f64::from(HEART_RATE_MAX_BPM),
            )?;
        }

        let medication_details = (self.medication_taken
            && !self.medication_details.trim().is_empty())
        .then(|| self.medication_details.trim().to_owned());

        Ok(HealthRecord {
            id: new_id(),
            date: self.taken_at.and_utc(),
            weight: self.weight,
            temperature: self.temperature,
            heart_rate: self.heart_rate,
            symptoms: self.symptoms.clone(),
            behavior: Some(self.behavior.clone()),
            appetite: Some(self.appetite.clone()),
            sleep_quality: Some(self.sleep_quality.clone()),
            medication_taken: Some(self.medication_taken),
            medication_details,
            notes: non_blank(&self.notes),
        })
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(field, value, min, max))
    }
}

/// Lowercase, with every run of non-alphanumeric characters collapsed to `-`
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub(super) fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
