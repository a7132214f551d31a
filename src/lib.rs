// ABOUTME: Main library entry point for the Pawtrack pet care tracker
// ABOUTME: Health metrics, reminder scheduling, form drafts, view state, and stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

#![deny(unsafe_code)]

//! # Pawtrack
//!
//! Pet health tracking and daily care scheduling.
//!
//! ## Features
//!
//! - **Health metrics**: windowed weight, temperature and heart-rate stats
//!   with trend direction, vital anomaly checks and symptom frequency
//! - **Scheduling**: reminders resolved for today, tomorrow, an upcoming
//!   horizon or any calendar date, grouped by time of day
//! - **Forms**: validated drafts for new health records and reminders
//! - **Stores**: async record and reminder stores, in memory or on disk
//!
//! ## Architecture
//!
//! - **`pawtrack-core`**: errors, constants and the data model
//! - **`pawtrack-intelligence`**: the metrics aggregator and anomaly detection
//! - **this crate**: scheduling, forms, view state, stores, configuration
//!   and the `pawtrack-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use pawtrack::intelligence::{MetricsAggregator, TimeWindow};
//! use pawtrack::stores::{JsonFileStore, RecordStore};
//!
//! # async fn run() -> pawtrack::errors::AppResult<()> {
//! let store = JsonFileStore::open("/tmp/pawtrack").await?;
//! let records = store.records().await?;
//! let summary = MetricsAggregator::summarize(&records, TimeWindow::OneMonth, Utc::now(), 5);
//! println!("{} records, anomalies: {}", summary.record_count, summary.has_anomalies);
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Domain constants plus configuration and storage names
pub mod constants;

/// Unified error handling re-exported from `pawtrack-core`
pub mod errors;

/// Health record and reminder form drafts
pub mod forms;

/// Metrics aggregation and anomaly detection
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data model re-exported from `pawtrack-core`
pub mod models;

/// Reminder resolution for schedule contexts
pub mod scheduling;

/// Async record and reminder stores
pub mod stores;

/// Dashboard and scheduler presentation state
pub mod view_state;
