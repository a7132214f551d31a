// ABOUTME: Health record commands for pawtrack-cli
// ABOUTME: Windowed summary output and validated check-in entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use chrono::{NaiveDateTime, Utc};
use clap::Args;
use pawtrack::config::PawtrackConfig;
use pawtrack::errors::AppResult;
use pawtrack::forms::HealthRecordDraft;
use pawtrack::intelligence::TimeWindow;
use pawtrack::models::{Appetite, Behavior, SleepQuality};
use pawtrack::stores::RecordStore;
use pawtrack::view_state::HealthViewState;
use tracing::info;

use crate::helpers::display;

/// Fields of a new check-in
#[derive(Args)]
pub struct AddRecordArgs {
    /// Weight in kg
    #[arg(long)]
    weight: f64,

    /// Temperature in °C
    #[arg(long)]
    temperature: f64,

    /// Heart rate in bpm
    #[arg(long)]
    heart_rate: Option<u32>,

    /// Symptom tag (repeatable)
    #[arg(long = "symptom")]
    symptoms: Vec<String>,

    /// Free-text symptom, stored under a custom tag (repeatable)
    #[arg(long = "custom-symptom")]
    custom_symptoms: Vec<String>,

    /// Behavior (normal, hyperactive, lethargic, anxious, aggressive, depressed)
    #[arg(long)]
    behavior: Option<String>,

    /// Appetite (increased, normal, decreased, none)
    #[arg(long)]
    appetite: Option<String>,

    /// Sleep quality (excellent, normal, restless, insomnia)
    #[arg(long)]
    sleep: Option<String>,

    /// Medication given, if any
    #[arg(long)]
    medication: Option<String>,

    /// Notes
    #[arg(long)]
    notes: Option<String>,

    /// Check-in time (YYYY-MM-DDTHH:MM:SS, UTC); defaults to now
    #[arg(long)]
    at: Option<NaiveDateTime>,
}

/// Print the summary for a window
pub async fn summary(
    store: &impl RecordStore,
    config: &PawtrackConfig,
    window: Option<TimeWindow>,
    top: Option<usize>,
    json: bool,
) -> AppResult<()> {
    let records = store.records().await?;
    let state = HealthViewState::with_window(window.unwrap_or(config.default_window));
    let summary = state.summarize(&records, Utc::now(), top.unwrap_or(config.top_symptoms));

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display::print_health_summary(&summary);
    }
    Ok(())
}

/// Validate and store a new check-in
pub async fn add(store: &impl RecordStore, args: AddRecordArgs) -> AppResult<()> {
    let mut draft = HealthRecordDraft::new(args.at.unwrap_or_else(|| Utc::now().naive_utc()));
    draft.weight = args.weight;
    draft.temperature = args.temperature;
    draft.heart_rate = args.heart_rate;

    for tag in &args.symptoms {
        if !draft.symptoms.contains(tag) {
            draft.toggle_symptom(tag);
        }
    }
    for label in &args.custom_symptoms {
        draft.add_custom_symptom(label);
    }

    if let Some(behavior) = args.behavior {
        draft.behavior = Behavior::from(behavior);
    }
    if let Some(appetite) = args.appetite {
        draft.appetite = Appetite::from(appetite);
    }
    if let Some(sleep) = args.sleep {
        draft.sleep_quality = SleepQuality::from(sleep);
    }
    if let Some(medication) = args.medication {
        draft.medication_taken = true;
        draft.medication_details = medication;
    }
    draft.notes = args.notes.unwrap_or_default();

    let record = draft.build()?;
    let id = record.id.clone();
    store.add_record(record).await?;
    info!(record_id = %id, "Recorded health check-in");
    println!("Recorded check-in {id}");
    Ok(())
}
