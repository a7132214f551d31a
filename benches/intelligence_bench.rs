// ABOUTME: Criterion benchmarks for health metric aggregation and reminder resolution
// ABOUTME: Measures window summaries, symptom tallies, and schedule grouping at scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! Criterion benchmarks for the metrics aggregator and schedule resolver.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pawtrack::intelligence::{HealthMetric, MetricsAggregator, TimeWindow};
use pawtrack::models::{DayOfWeek, HealthRecord, Recurrence, Reminder, ReminderTime};
use pawtrack::scheduling::{ScheduleContext, ScheduleResolver};

const SYMPTOMS: [&str; 6] = [
    "coughing",
    "sneezing",
    "vomiting",
    "diarrhea",
    "lethargy",
    "itching",
];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_records(count: usize) -> Vec<HealthRecord> {
    let Some(base) = Utc.with_ymd_and_hms(2024, 6, 30, 9, 0, 0).single() else {
        return Vec::new();
    };
    (0..count)
        .map(|index| {
            let date = base - Duration::hours((index * 7) as i64);
            let weight = 30.0 + ((index * 13) % 40) as f64 / 10.0;
            let temperature = 37.8 + ((index * 7) % 20) as f64 / 10.0;
            let symptoms = SYMPTOMS
                .iter()
                .enumerate()
                .filter(|(offset, _)| (index + offset) % 4 == 0)
                .map(|(_, tag)| *tag);
            HealthRecord::new(format!("bench_record_{index}"), date, weight, temperature)
                .with_heart_rate(70 + u32::try_from(index % 90).unwrap_or(0))
                .with_symptoms(symptoms)
        })
        .collect()
}

fn generate_reminders(count: usize) -> Vec<Reminder> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
    (0..count)
        .filter_map(|index| {
            let hour = u8::try_from(index % 24).ok()?;
            let minute = u8::try_from((index * 15) % 60).ok()?;
            let time = ReminderTime::new(hour, minute).ok()?;
            let recurrence = if index % 3 == 0 {
                Recurrence::once(start + Duration::days(i64::try_from(index % 60).ok()?))
            } else {
                Recurrence::weekly(DayOfWeek::ALL.into_iter().skip(index % 7).step_by(2))
            };
            Some(Reminder::new(
                format!("bench_reminder_{index}"),
                "Benchmark reminder",
                time,
                recurrence,
            ))
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let Some(reference) = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).single() else {
        return;
    };

    for count in [10_usize, 100, 1_000, 10_000] {
        let records = generate_records(count);
        group.throughput(Throughput::Elements(count as u64));
        for window in [TimeWindow::OneWeek, TimeWindow::OneYear] {
            group.bench_with_input(
                BenchmarkId::new(window.code(), count),
                &records,
                |b, records| {
                    b.iter(|| {
                        MetricsAggregator::summarize(
                            black_box(records),
                            black_box(window),
                            reference,
                            5,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_compute_stats(c: &mut Criterion) {
    let records = generate_records(1_000);
    c.bench_function("compute_stats_weight_1000", |b| {
        b.iter(|| MetricsAggregator::compute_stats(black_box(&records), HealthMetric::Weight));
    });
}

fn bench_tally_symptoms(c: &mut Criterion) {
    let records = generate_records(1_000);
    c.bench_function("tally_symptoms_1000", |b| {
        b.iter(|| MetricsAggregator::tally_symptoms(black_box(&records), 5));
    });
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    let reference = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or_default();

    for count in [10_usize, 100, 1_000] {
        let reminders = generate_reminders(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("resolve_and_group", count),
            &reminders,
            |b, reminders| {
                b.iter(|| {
                    let active = ScheduleResolver::resolve_active_reminders(
                        black_box(reminders),
                        ScheduleContext::Today,
                        reference,
                    );
                    ScheduleResolver::group_by_time(active).len()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_summarize,
    bench_compute_stats,
    bench_tally_symptoms,
    bench_schedule
);
criterion_main!(benches);
