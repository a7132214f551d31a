// ABOUTME: Integration tests for windowed health metric aggregation
// ABOUTME: Covers window filtering, per-metric stats, trend classification, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{record, record_with_hr, record_with_symptoms, utc};
use pawtrack::intelligence::{HealthMetric, MetricStats, MetricsAggregator, TimeWindow, Trend};
use pawtrack::models::HealthRecord;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn two_readings() -> Vec<HealthRecord> {
    vec![
        record("r1", utc(2024, 3, 10), 32.5, 38.0),
        record("r2", utc(2024, 3, 1), 32.1, 38.2),
    ]
}

#[test]
fn test_weight_stats_for_two_readings() {
    let stats = MetricsAggregator::compute_stats(&two_readings(), HealthMetric::Weight);

    assert_close(stats.current, 32.5);
    assert_close(stats.average, 32.3);
    assert_close(stats.change, 0.4);
    // 0.4 is inside the stable band, which requires a change above 0.5
    assert_eq!(stats.trend, Trend::Stable);
}

#[test]
fn test_temperature_stats_for_two_readings() {
    let stats = MetricsAggregator::compute_stats(&two_readings(), HealthMetric::Temperature);

    assert_close(stats.current, 38.0);
    assert_close(stats.average, 38.1);
    assert_close(stats.change, 0.2);
    assert_eq!(stats.trend, Trend::Stable);
}

#[test]
fn test_trend_direction_uses_signed_change() {
    let rising = vec![
        record("new", utc(2024, 3, 10), 31.0, 38.0),
        record("old", utc(2024, 3, 1), 30.0, 38.0),
    ];
    let falling = vec![
        record("new", utc(2024, 3, 10), 29.0, 38.0),
        record("old", utc(2024, 3, 1), 30.0, 38.0),
    ];

    let up = MetricsAggregator::compute_stats(&rising, HealthMetric::Weight);
    let down = MetricsAggregator::compute_stats(&falling, HealthMetric::Weight);

    assert_eq!(up.trend, Trend::Increasing);
    assert_eq!(down.trend, Trend::Decreasing);
    // change is reported as a magnitude in both directions
    assert_close(up.change, 1.0);
    assert_close(down.change, 1.0);
}

#[test]
fn test_change_of_exactly_threshold_is_stable() {
    let records = vec![
        record("new", utc(2024, 3, 10), 30.5, 38.0),
        record("old", utc(2024, 3, 1), 30.0, 38.0),
    ];
    let stats = MetricsAggregator::compute_stats(&records, HealthMetric::Weight);
    assert_eq!(stats.trend, Trend::Stable);
}

#[test]
fn test_stats_ignore_input_order() {
    let mut reversed = two_readings();
    reversed.reverse();

    assert_eq!(
        MetricsAggregator::compute_stats(&reversed, HealthMetric::Weight),
        MetricsAggregator::compute_stats(&two_readings(), HealthMetric::Weight)
    );
}

#[test]
fn test_all_equal_values_are_stable_with_zero_change() {
    let records: Vec<HealthRecord> = (1..=5)
        .map(|day| record(&format!("r{day}"), utc(2024, 5, day), 20.0, 38.4))
        .collect();

    for metric in [HealthMetric::Weight, HealthMetric::Temperature] {
        let stats = MetricsAggregator::compute_stats(&records, metric);
        assert_eq!(stats.trend, Trend::Stable);
        assert_close(stats.change, 0.0);
    }
}

#[test]
fn test_empty_records_yield_zeroed_stats() {
    let records: Vec<HealthRecord> = Vec::new();
    for metric in HealthMetric::ALL {
        assert_eq!(
            MetricsAggregator::compute_stats(&records, metric),
            MetricStats::default()
        );
    }
}

#[test]
fn test_single_record_has_no_change() {
    let records = vec![record("only", utc(2024, 1, 1), 12.3, 38.8)];
    let stats = MetricsAggregator::compute_stats(&records, HealthMetric::Weight);

    assert_close(stats.current, 12.3);
    assert_close(stats.average, 12.3);
    assert_close(stats.change, 0.0);
    assert_eq!(stats.trend, Trend::Stable);
}

#[test]
fn test_missing_heart_rate_counts_as_zero() {
    let records = vec![
        record_with_hr("new", utc(2024, 3, 10), 30.0, 38.5, 90),
        record("old", utc(2024, 3, 1), 30.0, 38.5),
    ];
    let stats = MetricsAggregator::compute_stats(&records, HealthMetric::HeartRate);

    assert_close(stats.current, 90.0);
    assert_close(stats.average, 45.0);
    assert_close(stats.change, 90.0);
    assert_eq!(stats.trend, Trend::Increasing);
}

#[test]
fn test_stats_by_name_accepts_wire_tags_and_degrades_on_unknown() {
    let records = two_readings();

    assert_eq!(
        MetricsAggregator::compute_stats_by_name(&records, "weight"),
        MetricsAggregator::compute_stats(&records, HealthMetric::Weight)
    );
    assert_eq!(
        MetricsAggregator::compute_stats_by_name(&records, "heartRate"),
        MetricsAggregator::compute_stats(&records, HealthMetric::HeartRate)
    );
    assert_eq!(
        MetricsAggregator::compute_stats_by_name(&records, "bloodPressure"),
        MetricStats::default()
    );
}

fn spread_records() -> Vec<HealthRecord> {
    vec![
        record("future", utc(2024, 4, 5), 30.0, 38.5),
        record("d1", utc(2024, 3, 30), 30.0, 38.5),
        record("d11", utc(2024, 3, 20), 30.0, 38.5),
        record("d30", utc(2024, 3, 1), 30.0, 38.5),
        record("leap", utc(2024, 2, 29), 30.0, 38.5),
        record("jan", utc(2024, 1, 15), 30.0, 38.5),
        record("june", utc(2023, 6, 1), 30.0, 38.5),
        record("ancient", utc(2022, 12, 1), 30.0, 38.5),
    ]
}

fn ids(records: &[&HealthRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}

#[test]
fn test_filter_by_week_keeps_last_seven_days_and_future_records() {
    let records = spread_records();
    let kept = MetricsAggregator::filter_by_window(&records, TimeWindow::OneWeek, utc(2024, 3, 31));
    assert_eq!(ids(&kept), vec!["future", "d1"]);
}

#[test]
fn test_filter_by_month_clamps_to_end_of_february() {
    let records = spread_records();
    let kept =
        MetricsAggregator::filter_by_window(&records, TimeWindow::OneMonth, utc(2024, 3, 31));

    // March 31 minus one month is February 29, and the cutoff is inclusive
    assert_eq!(ids(&kept), vec!["future", "d1", "d11", "d30", "leap"]);
}

#[test]
fn test_filter_by_longer_windows() {
    let records = spread_records();
    let reference = utc(2024, 3, 31);

    let quarter = MetricsAggregator::filter_by_window(&records, TimeWindow::ThreeMonths, reference);
    assert!(ids(&quarter).contains(&"jan".to_owned()));
    assert!(!ids(&quarter).contains(&"june".to_owned()));

    let year = MetricsAggregator::filter_by_window(&records, TimeWindow::OneYear, reference);
    assert_eq!(year.len(), 7);
    assert!(!ids(&year).contains(&"ancient".to_owned()));
}

#[test]
fn test_widening_window_never_shrinks_result() {
    let records = spread_records();
    for reference in [utc(2024, 3, 31), utc(2024, 1, 1), utc(2023, 7, 15)] {
        let sizes: Vec<usize> = TimeWindow::ALL
            .into_iter()
            .map(|window| MetricsAggregator::filter_by_window(&records, window, reference).len())
            .collect();
        assert!(
            sizes.windows(2).all(|pair| pair[0] <= pair[1]),
            "window sizes not monotonic at {reference}: {sizes:?}"
        );
    }
}

#[test]
fn test_filter_preserves_input_order() {
    let mut records = spread_records();
    records.reverse();
    let kept = MetricsAggregator::filter_by_window(&records, TimeWindow::OneWeek, utc(2024, 3, 31));
    assert_eq!(ids(&kept), vec!["d1", "future"]);
}

#[test]
fn test_window_codes_parse_with_fallback() {
    assert_eq!("1y".parse::<TimeWindow>().unwrap(), TimeWindow::OneYear);
    assert_eq!("3M".parse::<TimeWindow>().unwrap(), TimeWindow::ThreeMonths);
    assert!("2w".parse::<TimeWindow>().is_err());
    assert_eq!(TimeWindow::parse_or_default("2w"), TimeWindow::OneMonth);
    assert_eq!(TimeWindow::default().code(), "1m");
}

#[test]
fn test_chart_series_runs_oldest_first() {
    let records = two_readings();
    let chart = MetricsAggregator::chart_series(&records);

    assert_eq!(chart.len(), 2);
    assert!(chart[0].date < chart[1].date);
    assert_close(chart[0].weight, 32.1);
}

#[test]
fn test_summarize_combines_window_stats_anomalies_and_symptoms() {
    let records = vec![
        record_with_hr("hot", utc(2024, 3, 28), 30.2, 40.1, 120),
        record_with_symptoms("cough", utc(2024, 3, 20), &["coughing", "sneezing"]),
        record_with_symptoms("old", utc(2023, 1, 1), &["limping"]),
    ];

    let summary = MetricsAggregator::summarize(&records, TimeWindow::OneMonth, utc(2024, 3, 31), 5);

    assert_eq!(summary.record_count, 2);
    assert!(summary.has_anomalies);
    assert_close(summary.weight.current, 30.2);
    assert_eq!(summary.chart.len(), 2);
    let symptoms: Vec<&str> = summary
        .top_symptoms
        .iter()
        .map(|entry| entry.symptom.as_str())
        .collect();
    assert_eq!(symptoms, vec!["coughing", "sneezing"]);
    assert_eq!(summary.stats(HealthMetric::Weight), &summary.weight);
}

#[test]
fn test_summary_serializes_window_code() {
    let summary =
        MetricsAggregator::summarize(&two_readings(), TimeWindow::OneWeek, utc(2024, 3, 12), 5);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["window"], "1w");
    assert_eq!(json["recordCount"], 1);
    assert_eq!(json["weight"]["trend"], "stable");
}
