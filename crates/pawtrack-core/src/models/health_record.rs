// ABOUTME: Health record model captured by the daily health entry form
// ABOUTME: Vital signs, symptom tags, and categorical observations for a single check-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single health check-in
///
/// Records are immutable once created: the entry form appends new ones and
/// nothing in the workspace mutates an existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Opaque identifier
    pub id: String,
    /// When the check-in was taken
    #[serde(deserialize_with = "deserialize_check_in_date")]
    pub date: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body temperature in degrees Celsius
    pub temperature: f64,
    /// Resting heart rate in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Symptom tags, in the order they were selected
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Observed behavior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    /// Observed appetite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appetite: Option<Appetite>,
    /// Observed sleep quality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<SleepQuality>,
    /// Whether medication was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_taken: Option<bool>,
    /// What medication was given, only meaningful when `medication_taken`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_details: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthRecord {
    /// Create a record with the required vitals and no optional observations
    #[must_use]
    pub fn new(id: impl Into<String>, date: DateTime<Utc>, weight: f64, temperature: f64) -> Self {
        Self {
            id: id.into(),
            date,
            weight,
            temperature,
            heart_rate: None,
            symptoms: Vec::new(),
            behavior: None,
            appetite: None,
            sleep_quality: None,
            medication_taken: None,
            medication_details: None,
            notes: None,
        }
    }

    /// Set the heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    /// Set the symptom tags
    #[must_use]
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }
}

/// Local form timestamps without an offset are taken as UTC
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a check-in timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` as UTC, or `YYYY-MM-DD` as
/// midnight UTC.
#[must_use]
pub fn parse_check_in_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn deserialize_check_in_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_check_in_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid check-in date: {raw}")))
}

/// Declares a categorical observation with a set of known values and a
/// catch-all that preserves unrecognized strings.
macro_rules! observation {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not in the known set
            Other(String),
        }

        impl $name {
            /// Wire tag for this value
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($tag => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

observation! {
    /// Behavior observed during the check-in
    Behavior {
        /// Usual behavior
        Normal => "normal",
        /// Unusually energetic
        Hyperactive => "hyperactive",
        /// Unusually tired
        Lethargic => "lethargic",
        /// Nervous or restless
        Anxious => "anxious",
        /// Snapping or growling
        Aggressive => "aggressive",
        /// Withdrawn
        Depressed => "depressed",
    }
}

observation! {
    /// Appetite observed during the check-in
    Appetite {
        /// Eating more than usual
        Increased => "increased",
        /// Usual appetite
        Normal => "normal",
        /// Eating less than usual
        Decreased => "decreased",
        /// Not eating
        NotEating => "none",
    }
}

observation! {
    /// Sleep quality since the previous check-in
    SleepQuality {
        /// Sleeping very well
        Excellent => "excellent",
        /// Usual sleep
        Normal => "normal",
        /// Waking often
        Restless => "restless",
        /// Difficulty sleeping
        Insomnia => "insomnia",
    }
}
