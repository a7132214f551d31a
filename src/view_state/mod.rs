// ABOUTME: Per-screen presentation state for the health dashboard and scheduler
// ABOUTME: Plain serializable values updated through pure reducers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

/// Health and analyzer dashboard state
pub mod health;
/// Scheduler state
pub mod scheduler;

pub use health::{HealthAction, HealthTab, HealthViewState};
pub use scheduler::{ScheduleTab, SchedulerAction, SchedulerViewState};
