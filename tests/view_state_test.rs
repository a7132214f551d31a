// ABOUTME: Integration tests for dashboard and scheduler view state reducers
// ABOUTME: Tab switching, window and metric selection, calendar navigation, and contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{daily, date, once, record, utc};
use pawtrack::intelligence::{HealthMetric, TimeWindow};
use pawtrack::scheduling::ScheduleContext;
use pawtrack::view_state::{
    HealthAction, HealthTab, HealthViewState, ScheduleTab, SchedulerAction, SchedulerViewState,
};

#[test]
fn test_health_reducer_changes_one_field_at_a_time() {
    let state = HealthViewState::default();
    assert_eq!(state.tab, HealthTab::Overview);
    assert_eq!(state.window, TimeWindow::OneMonth);

    let state = state.reduce(HealthAction::SelectWindow(TimeWindow::ThreeMonths));
    assert_eq!(state.window, TimeWindow::ThreeMonths);
    assert_eq!(state.tab, HealthTab::Overview);

    let state = state
        .reduce(HealthAction::SelectTab(HealthTab::Trends))
        .reduce(HealthAction::SelectMetric(HealthMetric::HeartRate));
    assert_eq!(
        state,
        HealthViewState {
            tab: HealthTab::Trends,
            window: TimeWindow::ThreeMonths,
            metric: HealthMetric::HeartRate,
        }
    );
}

#[test]
fn test_health_state_summary_uses_selected_window() {
    let records = vec![
        record("recent", utc(2024, 3, 28), 30.0, 38.5),
        record("older", utc(2024, 1, 10), 31.0, 38.5),
    ];
    let reference = utc(2024, 3, 31);

    let month =
        HealthViewState::with_window(TimeWindow::OneMonth).summarize(&records, reference, 5);
    let quarter =
        HealthViewState::with_window(TimeWindow::ThreeMonths).summarize(&records, reference, 5);

    assert_eq!(month.record_count, 1);
    assert_eq!(quarter.record_count, 2);
}

#[test]
fn test_health_state_round_trips_through_json() {
    let state = HealthViewState::with_window(TimeWindow::OneYear)
        .reduce(HealthAction::SelectTab(HealthTab::Records));
    let json = serde_json::to_value(state).unwrap();

    assert_eq!(json["tab"], "records");
    assert_eq!(json["window"], "1y");
    assert_eq!(serde_json::from_value::<HealthViewState>(json).unwrap(), state);
}

fn today() -> NaiveDate {
    date(2024, 3, 12)
}

#[test]
fn test_scheduler_tabs_map_to_contexts() {
    let state = SchedulerViewState::new(today());
    assert_eq!(state.context(), ScheduleContext::Today);

    let upcoming = state.reduce(SchedulerAction::SelectTab(ScheduleTab::Upcoming));
    assert_eq!(upcoming.context(), ScheduleContext::UpcomingWithinDays(7));

    let calendar = state
        .reduce(SchedulerAction::SelectDate(date(2024, 5, 1)))
        .reduce(SchedulerAction::SelectTab(ScheduleTab::Calendar));
    assert_eq!(calendar.context(), ScheduleContext::OnDate(date(2024, 5, 1)));
}

#[test]
fn test_shifting_selected_date_moves_across_months() {
    let state = SchedulerViewState::new(date(2024, 2, 28))
        .reduce(SchedulerAction::ShiftSelectedDate(2))
        .reduce(SchedulerAction::ShiftSelectedDate(-1));
    assert_eq!(state.selected_date, date(2024, 2, 29));

    let back = SchedulerViewState::new(date(2024, 3, 1))
        .reduce(SchedulerAction::ShiftSelectedDate(-1));
    assert_eq!(back.selected_date, date(2024, 2, 29));
}

#[test]
fn test_shifting_past_calendar_range_keeps_selection() {
    let state =
        SchedulerViewState::new(NaiveDate::MAX).reduce(SchedulerAction::ShiftSelectedDate(1));
    assert_eq!(state.selected_date, NaiveDate::MAX);
}

#[test]
fn test_scheduler_time_groups_follow_active_tab() {
    let reminders = vec![
        daily("walk", "07:00"),
        once("vet", "15:00", date(2024, 3, 15)),
        daily("dinner", "18:00"),
    ];

    let today_groups = SchedulerViewState::new(today()).time_groups(&reminders, today());
    assert_eq!(today_groups.len(), 2);
    assert_eq!(today_groups[0].reminders[0].id, "walk");

    let upcoming = SchedulerViewState::new(today())
        .reduce(SchedulerAction::SelectTab(ScheduleTab::Upcoming))
        .time_groups(&reminders, today());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].reminders[0].id, "vet");
}

#[test]
fn test_schedule_tab_parses_cli_names() {
    assert_eq!("date".parse::<ScheduleTab>().unwrap(), ScheduleTab::Calendar);
    assert_eq!("Tomorrow".parse::<ScheduleTab>().unwrap(), ScheduleTab::Tomorrow);
    assert!("yesterday".parse::<ScheduleTab>().is_err());
}

#[test]
fn test_scheduler_state_serializes_camel_case() {
    let state = SchedulerViewState::new(today()).with_upcoming_days(14);
    let json = serde_json::to_value(state).unwrap();

    assert_eq!(json["tab"], "today");
    assert_eq!(json["selectedDate"], "2024-03-12");
    assert_eq!(json["upcomingDays"], 14);
}
