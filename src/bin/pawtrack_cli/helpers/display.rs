// ABOUTME: Output formatting helpers for pawtrack-cli
// ABOUTME: Plain-text rendering of health summaries and grouped schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use pawtrack::intelligence::{HealthMetric, HealthSummary};
use pawtrack::models::{DayOfWeek, Recurrence, Reminder};
use pawtrack::scheduling::{ScheduleContext, TimeGroup};

/// Print the stats, anomaly banner, and symptom list of a summary
pub fn print_health_summary(summary: &HealthSummary) {
    println!(
        "\nHealth summary ({}) - {} record(s) since {}",
        summary.window.label(),
        summary.record_count,
        summary.cutoff.format("%Y-%m-%d")
    );
    println!("{}", "=".repeat(60));

    if summary.record_count == 0 {
        println!("No records in this window.");
        return;
    }

    for metric in HealthMetric::ALL {
        let stats = summary.stats(metric);
        println!(
            "{:<12} current {:>6.1} {:<4} avg {:>6.1}  change {:>4.1} ({})",
            metric.label(),
            stats.current,
            metric.unit(),
            stats.average,
            stats.change,
            stats.trend
        );
    }

    if summary.has_anomalies {
        println!("\nWARNING: readings outside the normal range were recorded.");
    }

    if !summary.top_symptoms.is_empty() {
        println!("\nMost frequent symptoms:");
        for entry in &summary.top_symptoms {
            println!("  {:<24} {}", entry.symptom, entry.count);
        }
    }
}

/// Print reminder groups under a heading for the context
pub fn print_schedule(context: &ScheduleContext, groups: &[TimeGroup<'_>]) {
    println!("\nSchedule for {context}");
    println!("{}", "=".repeat(60));

    if groups.is_empty() {
        println!("No reminders.");
        return;
    }

    for group in groups {
        println!("{}", group.time);
        for reminder in &group.reminders {
            println!("  {}", reminder_line(reminder));
        }
    }
}

/// Print a single reminder
pub fn print_reminder(reminder: &Reminder) {
    println!("{} {}", reminder.time, reminder_line(reminder));
}

fn reminder_line(reminder: &Reminder) -> String {
    let check = if reminder.completed { "[x]" } else { "[ ]" };
    let when = match &reminder.recurrence {
        Recurrence::Weekly { days } if days.len() == 7 => "every day".to_owned(),
        Recurrence::Weekly { days } => days
            .iter()
            .copied()
            .map(DayOfWeek::as_str)
            .collect::<Vec<_>>()
            .join(","),
        Recurrence::Once { date } => date.to_string(),
    };
    let disabled = if reminder.enabled { "" } else { " (disabled)" };
    format!(
        "{check} {} {} [{}, {}] {when}{disabled}  id={}",
        reminder.category.icon(),
        reminder.title,
        reminder.category.label(),
        reminder.priority,
        reminder.id
    )
}
