// ABOUTME: Serializable view state for the health and analyzer dashboards
// ABOUTME: Tab, time window, and selected metric driven by a pure reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::intelligence::{HealthMetric, HealthSummary, MetricsAggregator, TimeWindow};
use crate::models::HealthRecord;

/// Health dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTab {
    /// Current stats and anomaly banner
    #[default]
    Overview,
    /// Metric charts
    Trends,
    /// Record history
    Records,
}

/// Everything the health dashboard remembers between renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthViewState {
    /// Active tab
    pub tab: HealthTab,
    /// Time window for every query
    pub window: TimeWindow,
    /// Metric shown on the trend chart
    pub metric: HealthMetric,
}

/// User interactions on the health dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HealthAction {
    /// Switch tab
    SelectTab(HealthTab),
    /// Switch time window
    SelectWindow(TimeWindow),
    /// Switch charted metric
    SelectMetric(HealthMetric),
}

impl HealthViewState {
    /// Start from the given window with every other field at its default
    #[must_use]
    pub fn with_window(window: TimeWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Apply an action, returning the next state
    #[must_use]
    pub const fn reduce(self, action: HealthAction) -> Self {
        match action {
            HealthAction::SelectTab(tab) => Self { tab, ..self },
            HealthAction::SelectWindow(window) => Self { window, ..self },
            HealthAction::SelectMetric(metric) => Self { metric, ..self },
        }
    }

    /// Summary the dashboard renders for this state
    #[must_use]
    pub fn summarize<R: Borrow<HealthRecord>>(
        &self,
        records: &[R],
        reference: DateTime<Utc>,
        top_symptoms: usize,
    ) -> HealthSummary {
        MetricsAggregator::summarize(records, self.window, reference, top_symptoms)
    }
}
