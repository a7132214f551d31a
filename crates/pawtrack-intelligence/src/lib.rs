// ABOUTME: Health metrics analysis engine for the Pawtrack pet care platform
// ABOUTME: Window filtering, trend classification, anomaly detection, and symptom tallies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

#![deny(unsafe_code)]

//! # Pawtrack Intelligence
//!
//! Stateless analysis over health records supplied by the caller. Every
//! function is synchronous, allocates only its own outputs, and never
//! mutates its inputs, so it may be called from any number of places at once.

/// Window filtering, per-metric statistics, chart series and summaries
pub mod metrics;

/// Reference-range anomaly detection and symptom frequency
pub mod pattern_detection;

pub use metrics::{
    ChartPoint, HealthMetric, HealthSummary, MetricStats, MetricsAggregator, TimeWindow, Trend,
};
pub use pattern_detection::{AnomalyKind, SymptomCount, VitalAnomaly};
