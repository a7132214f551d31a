// ABOUTME: Reminder schedule commands for pawtrack-cli
// ABOUTME: Tab view, reminder creation, enabled/completed toggles, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{Local, NaiveDate};
use pawtrack::config::PawtrackConfig;
use pawtrack::errors::{AppError, AppResult};
use pawtrack::forms::ReminderDraft;
use pawtrack::models::{DayOfWeek, Priority, Reminder, ReminderCategory, ReminderTime};
use pawtrack::scheduling::ScheduleResolver;
use pawtrack::stores::{ReminderPatch, ReminderStore};
use pawtrack::view_state::{ScheduleTab, SchedulerAction, SchedulerViewState};
use std::collections::BTreeSet;

use crate::helpers::display;

/// Parsed `schedule add` arguments
pub struct AddReminderRequest {
    pub title: String,
    pub time: ReminderTime,
    pub days: Vec<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

/// Print the reminders of a tab grouped by time
pub async fn show(
    store: &impl ReminderStore,
    config: &PawtrackConfig,
    tab: Option<ScheduleTab>,
    date: Option<NaiveDate>,
    days: Option<u32>,
    json: bool,
) -> AppResult<()> {
    if let (Some(date), Some(tab)) = (date, tab.filter(|tab| *tab != ScheduleTab::Calendar)) {
        return Err(AppError::invalid_input(format!(
            "--date {date} only applies to the date tab, not {tab}"
        )));
    }

    let today = Local::now().date_naive();
    let mut state =
        SchedulerViewState::new(today).with_upcoming_days(days.unwrap_or(config.upcoming_days));
    if let Some(date) = date {
        state = state
            .reduce(SchedulerAction::SelectDate(date))
            .reduce(SchedulerAction::SelectTab(ScheduleTab::Calendar));
    }
    if let Some(tab) = tab {
        state = state.reduce(SchedulerAction::SelectTab(tab));
    }

    let reminders = store.reminders().await?;
    let groups = state.time_groups(&reminders, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        display::print_schedule(&state.context(), &groups);
    }
    Ok(())
}

/// Validate and store a new reminder
pub async fn add(store: &impl ReminderStore, request: AddReminderRequest) -> AppResult<()> {
    let mut draft = ReminderDraft::titled(request.title);
    draft.time = request.time;

    if !request.days.is_empty() {
        draft.days = request
            .days
            .iter()
            .map(|day| day.parse::<DayOfWeek>())
            .collect::<AppResult<BTreeSet<_>>>()?;
    }
    if let Some(date) = request.date {
        draft.set_one_time(date);
    }
    if let Some(category) = request.category {
        draft.category = ReminderCategory::from_tag(&category);
    }
    if let Some(priority) = request.priority {
        draft.priority = priority;
    }
    draft.notes = request.notes.unwrap_or_default();

    let reminder = draft.build()?;
    let id = reminder.id.clone();
    store.add_reminder(reminder).await?;
    println!("Added reminder {id}");
    Ok(())
}

/// Flip the completed flag
pub async fn toggle_complete(store: &impl ReminderStore, id: &str) -> AppResult<()> {
    let toggled = ScheduleResolver::toggle_completion(&find(store, id).await?);
    let updated = store
        .update_reminder(id, ReminderPatch::completed(toggled.completed))
        .await?;
    display::print_reminder(&updated);
    Ok(())
}

/// Flip the enabled flag
pub async fn toggle_enabled(store: &impl ReminderStore, id: &str) -> AppResult<()> {
    let toggled = ScheduleResolver::toggle_enabled(&find(store, id).await?);
    let updated = store
        .update_reminder(id, ReminderPatch::enabled(toggled.enabled))
        .await?;
    display::print_reminder(&updated);
    Ok(())
}

/// Remove a reminder
pub async fn delete(store: &impl ReminderStore, id: &str) -> AppResult<()> {
    let removed = store.delete_reminder(id).await?;
    println!("Deleted reminder {} ({})", removed.id, removed.title);
    Ok(())
}

async fn find(store: &impl ReminderStore, id: &str) -> AppResult<Reminder> {
    store
        .reminders()
        .await?
        .into_iter()
        .find(|reminder| reminder.id == id)
        .ok_or_else(|| AppError::not_found(format!("Reminder {id}")))
}
