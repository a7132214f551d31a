// ABOUTME: Time-bounded health metric aggregation and trend classification
// ABOUTME: Window filtering, per-metric current/average/change/trend stats, and chart series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! # Health Metrics
//!
//! Pure query functions over caller-supplied health records. Nothing here
//! stores or mutates records; every output is a derived value.

use chrono::{DateTime, Duration, Months, Utc};
use pawtrack_core::constants::{stats, windows};
use pawtrack_core::errors::AppError;
use pawtrack_core::models::HealthRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::pattern_detection::SymptomCount;

/// Trailing time window used to bound a query over records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    /// Last 7 days
    #[serde(rename = "1w")]
    OneWeek,
    /// Last calendar month
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    /// Last three calendar months
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Last twelve calendar months
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeWindow {
    /// Every window, narrowest first
    pub const ALL: [Self; 4] = [
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::OneYear,
    ];

    /// Short code (`1w`, `1m`, `3m`, `1y`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::OneYear => "1y",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneWeek => "1 Week",
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::OneYear => "1 Year",
        }
    }

    /// Earliest instant included in the window ending at `reference`
    ///
    /// Month arithmetic is calendar-aware and clamps to the last valid day,
    /// so March 31 minus one month is the last day of February.
    #[must_use]
    pub fn cutoff(self, reference: DateTime<Utc>) -> DateTime<Utc> {
        let months = match self {
            Self::OneWeek => return reference - Duration::days(windows::WEEK_DAYS),
            Self::OneMonth => windows::MONTH_MONTHS,
            Self::ThreeMonths => windows::QUARTER_MONTHS,
            Self::OneYear => windows::YEAR_MONTHS,
        };
        reference
            .checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Parse a window code, falling back to one month for anything unknown
    #[must_use]
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for TimeWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1w" | "1week" | "week" => Ok(Self::OneWeek),
            "1m" | "1month" | "month" => Ok(Self::OneMonth),
            "3m" | "3months" | "quarter" => Ok(Self::ThreeMonths),
            "1y" | "1year" | "12m" | "year" => Ok(Self::OneYear),
            _ => Err(AppError::invalid_format(format!("Unknown time window: {s}"))),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Numeric health metric tracked on every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthMetric {
    /// Body weight (kg)
    #[default]
    Weight,
    /// Body temperature (°C)
    Temperature,
    /// Resting heart rate (bpm)
    HeartRate,
}

impl HealthMetric {
    /// Every metric in dashboard order
    pub const ALL: [Self; 3] = [Self::Weight, Self::Temperature, Self::HeartRate];

    /// Unit suffix for display
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Temperature => "°C",
            Self::HeartRate => "bpm",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
            Self::HeartRate => "Heart Rate",
        }
    }

    /// Value of this metric on a record, `None` when not recorded
    #[must_use]
    pub fn value_of(self, record: &HealthRecord) -> Option<f64> {
        match self {
            Self::Weight => Some(record.weight),
            Self::Temperature => Some(record.temperature),
            Self::HeartRate => record.heart_rate.map(f64::from),
        }
    }
}

impl FromStr for HealthMetric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight" => Ok(Self::Weight),
            "temperature" => Ok(Self::Temperature),
            "heartRate" | "heart_rate" | "heart-rate" => Ok(Self::HeartRate),
            _ => Err(AppError::invalid_format(format!("Unknown health metric: {s}"))),
        }
    }
}

impl fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::HeartRate => "heartRate",
        })
    }
}

/// Direction of the latest change in a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Latest reading rose by more than the threshold
    Increasing,
    /// Latest reading fell by more than the threshold
    Decreasing,
    /// Change within the threshold either way
    #[default]
    Stable,
}

impl Trend {
    /// Classify a signed change between the two most recent readings
    #[must_use]
    pub fn from_signed_change(change: f64) -> Self {
        if change > stats::TREND_THRESHOLD {
            Self::Increasing
        } else if change < -stats::TREND_THRESHOLD {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        })
    }
}

/// Summary of one metric over a record set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricStats {
    /// Value on the most recent record
    pub current: f64,
    /// Mean over all records, rounded to one decimal
    pub average: f64,
    /// Absolute difference between the two most recent readings, one decimal
    pub change: f64,
    /// Direction of the signed difference
    pub trend: Trend,
}

/// One point of the chronological chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Record timestamp
    pub date: DateTime<Utc>,
    /// Weight (kg)
    pub weight: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Heart rate (bpm), absent when not recorded
    pub heart_rate: Option<u32>,
}

/// Everything the health and analyzer dashboards render for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    /// Window the summary covers
    pub window: TimeWindow,
    /// End of the window
    pub reference_time: DateTime<Utc>,
    /// Start of the window (inclusive)
    pub cutoff: DateTime<Utc>,
    /// Number of records inside the window
    pub record_count: usize,
    /// Weight statistics
    pub weight: MetricStats,
    /// Temperature statistics
    pub temperature: MetricStats,
    /// Heart rate statistics
    pub heart_rate: MetricStats,
    /// Whether any record is outside the reference ranges
    pub has_anomalies: bool,
    /// Most frequent symptoms, most common first
    pub top_symptoms: Vec<SymptomCount>,
    /// Chronological chart series
    pub chart: Vec<ChartPoint>,
}

impl HealthSummary {
    /// Statistics for one metric
    #[must_use]
    pub const fn stats(&self, metric: HealthMetric) -> &MetricStats {
        match metric {
            HealthMetric::Weight => &self.weight,
            HealthMetric::Temperature => &self.temperature,
            HealthMetric::HeartRate => &self.heart_rate,
        }
    }
}

/// Stateless aggregation engine over health records
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Records dated on or after the window's cutoff
    ///
    /// Records dated after `reference` are kept; the window only bounds the
    /// past. Input order is preserved.
    #[must_use]
    pub fn filter_by_window<R: Borrow<HealthRecord>>(
        records: &[R],
        window: TimeWindow,
        reference: DateTime<Utc>,
    ) -> Vec<&HealthRecord> {
        let cutoff = window.cutoff(reference);
        let filtered: Vec<&HealthRecord> = borrowed(records)
            .filter(|record| record.date >= cutoff)
            .collect();

        debug!(
            window = %window,
            cutoff = %cutoff,
            total = records.len(),
            kept = filtered.len(),
            "Filtered health records by window"
        );
        filtered
    }

    /// Current value, average, latest change and trend for one metric
    ///
    /// Records are ordered most recent first internally, so callers may pass
    /// them in any order. Missing values count as zero in the average and in
    /// the change.
    #[must_use]
    pub fn compute_stats<R: Borrow<HealthRecord>>(
        records: &[R],
        metric: HealthMetric,
    ) -> MetricStats {
        let ordered = Self::most_recent_first(records);
        let values: Vec<f64> = ordered
            .iter()
            .map(|record| metric.value_of(record).unwrap_or(0.0))
            .collect();

        let Some(&current) = values.first() else {
            return MetricStats::default();
        };

        let average = round_to_tenth(values.iter().sum::<f64>() / values.len() as f64);
        let signed_change = values.get(1).map_or(0.0, |previous| current - previous);

        MetricStats {
            current,
            average,
            change: round_to_tenth(signed_change.abs()),
            trend: Trend::from_signed_change(signed_change),
        }
    }

    /// Statistics for a metric named by its wire tag
    ///
    /// Unknown names produce zeroed statistics instead of an error.
    #[must_use]
    pub fn compute_stats_by_name<R: Borrow<HealthRecord>>(
        records: &[R],
        name: &str,
    ) -> MetricStats {
        name.parse::<HealthMetric>().map_or_else(
            |_| {
                debug!(metric = name, "Unknown metric requested, returning zeroed stats");
                MetricStats::default()
            },
            |metric| Self::compute_stats(records, metric),
        )
    }

    /// Chronological series for chart rendering, oldest first
    #[must_use]
    pub fn chart_series<R: Borrow<HealthRecord>>(records: &[R]) -> Vec<ChartPoint> {
        let mut ordered: Vec<&HealthRecord> = borrowed(records).collect();
        ordered.sort_by_key(|record| record.date);
        ordered
            .into_iter()
            .map(|record| ChartPoint {
                date: record.date,
                weight: record.weight,
                temperature: record.temperature,
                heart_rate: record.heart_rate,
            })
            .collect()
    }

    /// Window-filtered summary of every metric, anomalies and symptoms
    #[must_use]
    pub fn summarize<R: Borrow<HealthRecord>>(
        records: &[R],
        window: TimeWindow,
        reference: DateTime<Utc>,
        top_symptoms: usize,
    ) -> HealthSummary {
        let filtered = Self::filter_by_window(records, window, reference);

        HealthSummary {
            window,
            reference_time: reference,
            cutoff: window.cutoff(reference),
            record_count: filtered.len(),
            weight: Self::compute_stats(&filtered, HealthMetric::Weight),
            temperature: Self::compute_stats(&filtered, HealthMetric::Temperature),
            heart_rate: Self::compute_stats(&filtered, HealthMetric::HeartRate),
            has_anomalies: Self::detect_anomalies(&filtered),
            top_symptoms: Self::tally_symptoms(&filtered, top_symptoms),
            chart: Self::chart_series(&filtered),
        }
    }

    fn most_recent_first<R: Borrow<HealthRecord>>(records: &[R]) -> Vec<&HealthRecord> {
        let mut ordered: Vec<&HealthRecord> = borrowed(records).collect();
        // Stable: records sharing a timestamp keep their input order
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
    }
}

/// Iterate records regardless of whether the caller holds them by value or by reference
pub(crate) fn borrowed<R: Borrow<HealthRecord>>(
    records: &[R],
) -> impl Iterator<Item = &HealthRecord> {
    records.iter().map(Borrow::<HealthRecord>::borrow)
}

/// Round half away from zero to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
