// ABOUTME: Care reminder model for the daily scheduler
// ABOUTME: Weekday sets, one-time dates, validated time-of-day, categories, and priorities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Day-of-week tag used by recurring reminders
///
/// Ordering runs Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl DayOfWeek {
    /// Every day, Monday first
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Day tag for a calendar date
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Wire tag (`mon`..`sun`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }

    /// Full English name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mon => "Monday",
            Self::Tue => "Tuesday",
            Self::Wed => "Wednesday",
            Self::Thu => "Thursday",
            Self::Fri => "Friday",
            Self::Sat => "Saturday",
            Self::Sun => "Sunday",
        }
    }

    /// Single-letter abbreviation for compact day pickers
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::Mon => "M",
            Self::Tue | Self::Thu => "T",
            Self::Wed => "W",
            Self::Fri => "F",
            Self::Sat | Self::Sun => "S",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Mon,
            Weekday::Tue => Self::Tue,
            Weekday::Wed => Self::Wed,
            Weekday::Thu => Self::Thu,
            Weekday::Fri => Self::Fri,
            Weekday::Sat => Self::Sat,
            Weekday::Sun => Self::Sun,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == tag || day.label().eq_ignore_ascii_case(&tag))
            .ok_or_else(|| AppError::invalid_format(format!("Unknown day of week: {s}")))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local time of day, always a valid 24-hour `HH:MM` value
///
/// Ordering is chronological, which matches lexicographic ordering of the
/// zero-padded text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

impl ReminderTime {
    /// Build from components
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the hour is not below 24 or the minute
    /// not below 60
    pub fn new(hour: u8, minute: u8) -> Result<Self, AppError> {
        if hour > 23 {
            return Err(AppError::value_out_of_range(
                "hour",
                f64::from(hour),
                0.0,
                23.0,
            ));
        }
        if minute > 59 {
            return Err(AppError::value_out_of_range(
                "minute",
                f64::from(minute),
                0.0,
                59.0,
            ));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0-23)
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component (0-59)
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Convert to a chrono time
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self { hour: 8, minute: 0 }
    }
}

impl FromStr for ReminderTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::invalid_format(format!("Expected HH:MM time, got '{s}'"));

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if hours.len() != 2
            || minutes.len() != 2
            || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour = hours.parse::<u8>().map_err(|_| invalid())?;
        let minute = minutes.parse::<u8>().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ReminderTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReminderTime> for String {
    fn from(value: ReminderTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// How often a reminder fires
///
/// Exactly one mode is active per reminder. On the wire a one-time reminder
/// carries a `date` and a recurring one carries `days`; when both are present
/// the date wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recurrence {
    /// Fires once on a specific calendar date
    Once {
        /// The calendar date
        date: NaiveDate,
    },
    /// Fires on a fixed set of weekdays, indefinitely
    Weekly {
        /// Days the reminder fires on
        days: BTreeSet<DayOfWeek>,
    },
}

impl Recurrence {
    /// Recurring every day of the week
    #[must_use]
    pub fn every_day() -> Self {
        Self::Weekly {
            days: DayOfWeek::ALL.into_iter().collect(),
        }
    }

    /// Recurring on the given days
    #[must_use]
    pub fn weekly<I: IntoIterator<Item = DayOfWeek>>(days: I) -> Self {
        Self::Weekly {
            days: days.into_iter().collect(),
        }
    }

    /// One-time on the given date
    #[must_use]
    pub const fn once(date: NaiveDate) -> Self {
        Self::Once { date }
    }

    /// Whether this is the weekday-set mode
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        matches!(self, Self::Weekly { .. })
    }

    /// Whether the reminder fires on `date`
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::Once { date: on } => *on == date,
            Self::Weekly { days } => days.contains(&DayOfWeek::of(date)),
        }
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Self::every_day()
    }
}

/// Reminder category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCategory {
    /// Meals and treats
    Feeding,
    /// Medication doses
    Medication,
    /// Walks and play
    Exercise,
    /// Brushing, bathing, nail trims
    Grooming,
    /// Veterinary appointments
    Vet,
    /// Training sessions
    Training,
    /// Anything else, including unrecognized categories
    #[default]
    #[serde(other)]
    Other,
}

impl ReminderCategory {
    /// Every category in display order
    pub const ALL: [Self; 7] = [
        Self::Feeding,
        Self::Medication,
        Self::Exercise,
        Self::Grooming,
        Self::Vet,
        Self::Training,
        Self::Other,
    ];

    /// Icon used when no category matches
    pub const FALLBACK_ICON: &'static str = "📝";

    /// Map a tag to a category; unknown tags become `Other`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(Self::Other)
    }

    /// Wire tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feeding => "feeding",
            Self::Medication => "medication",
            Self::Exercise => "exercise",
            Self::Grooming => "grooming",
            Self::Vet => "vet",
            Self::Training => "training",
            Self::Other => "other",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feeding => "Feeding",
            Self::Medication => "Medication",
            Self::Exercise => "Exercise",
            Self::Grooming => "Grooming",
            Self::Vet => "Veterinary",
            Self::Training => "Training",
            Self::Other => "Other",
        }
    }

    /// Display icon
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Feeding => "🍽️",
            Self::Medication => "💊",
            Self::Exercise => "🚶",
            Self::Grooming => "✂️",
            Self::Vet => "🏥",
            Self::Training => "🎓",
            Self::Other => Self::FALLBACK_ICON,
        }
    }
}

impl fmt::Display for ReminderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reminder priority
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice to do
    Low,
    /// Should be done
    #[default]
    Medium,
    /// Must be done
    High,
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AppError::invalid_format(format!("Unknown priority: {s}"))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// A care reminder
///
/// `enabled` and `completed` are independent flags; all four combinations
/// are valid. `completed` is a single flag even for recurring reminders and
/// is never reset from one day to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Opaque identifier
    pub id: String,
    /// Short title shown on the schedule
    pub title: String,
    /// Local time of day the reminder fires
    pub time: ReminderTime,
    /// Recurring weekdays or a one-time date
    #[serde(flatten)]
    pub recurrence: Recurrence,
    /// Category tag
    #[serde(default)]
    pub category: ReminderCategory,
    /// Whether the reminder is active
    pub enabled: bool,
    /// Whether the reminder has been done
    #[serde(default)]
    pub completed: bool,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Reminder {
    /// Create an enabled, not-completed reminder with default category and priority
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        time: ReminderTime,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time,
            recurrence,
            category: ReminderCategory::default(),
            enabled: true,
            completed: false,
            priority: Priority::default(),
            notes: None,
        }
    }

    /// Set the category
    #[must_use]
    pub const fn with_category(mut self, category: ReminderCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the reminder fires on `date`
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.recurrence.occurs_on(date)
    }
}
