// ABOUTME: Reminder selection for a schedule context and grouping by time of day
// ABOUTME: Pure functions plus the enabled/completed toggles used by the scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::context::ScheduleContext;
use crate::models::{Recurrence, Reminder, ReminderTime};

/// Reminders sharing one time of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeGroup<'a> {
    /// Shared time of day
    pub time: ReminderTime,
    /// Members, in input order
    pub reminders: Vec<&'a Reminder>,
}

/// Stateless reminder resolution engine
pub struct ScheduleResolver;

impl ScheduleResolver {
    /// Whether a reminder belongs to `context` relative to `reference`
    ///
    /// Recurring reminders belong to a dated context when its weekday is in
    /// their day set, and never to the upcoming horizon. One-time reminders
    /// belong to a dated context on an exact date match, and to the upcoming
    /// horizon when their date is after tomorrow and within the horizon, so
    /// they are never listed under both a day tab and the upcoming tab.
    #[must_use]
    pub fn is_active(reminder: &Reminder, context: ScheduleContext, reference: NaiveDate) -> bool {
        if let Some(date) = context.resolve_date(reference) {
            return reminder.occurs_on(date);
        }

        let ScheduleContext::UpcomingWithinDays(days) = context else {
            return false;
        };
        match &reminder.recurrence {
            Recurrence::Weekly { .. } => false,
            Recurrence::Once { date } => ScheduleContext::upcoming_bounds(reference, days)
                .is_some_and(|(tomorrow, horizon)| *date > tomorrow && *date <= horizon),
        }
    }

    /// Reminders active for `context`, in input order
    ///
    /// Disabled reminders are included; callers decide whether to dim or hide
    /// them.
    #[must_use]
    pub fn resolve_active_reminders(
        reminders: &[Reminder],
        context: ScheduleContext,
        reference: NaiveDate,
    ) -> Vec<&Reminder> {
        let active: Vec<&Reminder> = reminders
            .iter()
            .filter(|reminder| Self::is_active(reminder, context, reference))
            .collect();

        debug!(
            context = %context,
            reference = %reference,
            total = reminders.len(),
            active = active.len(),
            "Resolved active reminders"
        );
        active
    }

    /// One group per distinct time, earliest first, members in input order
    #[must_use]
    pub fn group_by_time<'a, I>(reminders: I) -> Vec<TimeGroup<'a>>
    where
        I: IntoIterator<Item = &'a Reminder>,
    {
        let mut buckets: BTreeMap<ReminderTime, Vec<&'a Reminder>> = BTreeMap::new();
        for reminder in reminders {
            buckets.entry(reminder.time).or_default().push(reminder);
        }

        buckets
            .into_iter()
            .map(|(time, reminders)| TimeGroup { time, reminders })
            .collect()
    }

    /// Flatten groups back into a single list, preserving group order
    #[must_use]
    pub fn flatten<'a>(groups: &[TimeGroup<'a>]) -> Vec<&'a Reminder> {
        groups
            .iter()
            .flat_map(|group| group.reminders.iter().copied())
            .collect()
    }

    /// Copy of the reminder with `completed` flipped
    #[must_use]
    pub fn toggle_completion(reminder: &Reminder) -> Reminder {
        Reminder {
            completed: !reminder.completed,
            ..reminder.clone()
        }
    }

    /// Copy of the reminder with `enabled` flipped
    #[must_use]
    pub fn toggle_enabled(reminder: &Reminder) -> Reminder {
        Reminder {
            enabled: !reminder.enabled,
            ..reminder.clone()
        }
    }
}
