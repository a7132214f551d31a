// ABOUTME: Out-of-range vital sign detection and symptom frequency analysis
// ABOUTME: Fixed veterinary reference-range checks and stable top-N symptom tallies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use pawtrack_core::constants::reference_ranges::{
    HEART_RATE_MAX_BPM, HEART_RATE_MIN_BPM, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
};
use pawtrack_core::models::HealthRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::metrics::{borrowed, MetricsAggregator};

/// Which reference range a reading violated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Temperature above the normal range (°C)
    HighTemperature(f64),
    /// Temperature below the normal range (°C)
    LowTemperature(f64),
    /// Heart rate above the normal range (bpm)
    HighHeartRate(u32),
    /// Heart rate below the normal range (bpm)
    LowHeartRate(u32),
}

impl AnomalyKind {
    /// Every violation on a single record, temperature first
    #[must_use]
    pub fn for_record(record: &HealthRecord) -> Vec<Self> {
        let mut found = Vec::new();

        if record.temperature > TEMPERATURE_MAX_C {
            found.push(Self::HighTemperature(record.temperature));
        } else if record.temperature < TEMPERATURE_MIN_C {
            found.push(Self::LowTemperature(record.temperature));
        }

        match record.heart_rate {
            Some(bpm) if bpm > HEART_RATE_MAX_BPM => found.push(Self::HighHeartRate(bpm)),
            Some(bpm) if bpm < HEART_RATE_MIN_BPM => found.push(Self::LowHeartRate(bpm)),
            _ => {}
        }

        found
    }
}

/// A record that tripped at least one reference-range check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalAnomaly {
    /// Offending record
    pub record_id: String,
    /// Violations found on it
    pub kinds: Vec<AnomalyKind>,
}

/// How often one symptom tag appeared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCount {
    /// Symptom tag
    pub symptom: String,
    /// Number of records carrying the tag
    pub count: usize,
}

impl MetricsAggregator {
    /// Whether any record has a temperature outside [37.5, 39.5] °C or a
    /// recorded heart rate outside [60, 140] bpm
    #[must_use]
    pub fn detect_anomalies<R: Borrow<HealthRecord>>(records: &[R]) -> bool {
        borrowed(records).any(|record| !AnomalyKind::for_record(record).is_empty())
    }

    /// Records outside the reference ranges, in input order
    #[must_use]
    pub fn anomalous_records<R: Borrow<HealthRecord>>(records: &[R]) -> Vec<VitalAnomaly> {
        borrowed(records)
            .filter_map(|record| {
                let kinds = AnomalyKind::for_record(record);
                (!kinds.is_empty()).then(|| VitalAnomaly {
                    record_id: record.id.clone(),
                    kinds,
                })
            })
            .collect()
    }

    /// The `top_n` most frequent symptom tags, most frequent first
    ///
    /// Each record contributes at most once per distinct tag. Ties keep the
    /// order in which tags were first encountered.
    #[must_use]
    pub fn tally_symptoms<R: Borrow<HealthRecord>>(
        records: &[R],
        top_n: usize,
    ) -> Vec<SymptomCount> {
        let mut tallies: Vec<SymptomCount> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for record in borrowed(records) {
            let mut seen_in_record: HashSet<&str> = HashSet::new();
            for symptom in &record.symptoms {
                if !seen_in_record.insert(symptom.as_str()) {
                    continue;
                }
                if let Some(&index) = positions.get(symptom.as_str()) {
                    tallies[index].count += 1;
                } else {
                    positions.insert(symptom.as_str(), tallies.len());
                    tallies.push(SymptomCount {
                        symptom: symptom.clone(),
                        count: 1,
                    });
                }
            }
        }

        let distinct = tallies.len();
        // sort_by is stable, which gives the first-encountered tie order
        tallies.sort_by(|a, b| b.count.cmp(&a.count));
        tallies.truncate(top_n);

        debug!(distinct, returned = tallies.len(), "Tallied symptoms");
        tallies
    }
}
