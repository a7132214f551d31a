// ABOUTME: Intelligence module re-exports from the pawtrack-intelligence crate
// ABOUTME: Preserves crate::intelligence paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! # Intelligence Module
//!
//! Health metric aggregation, trend classification and anomaly detection.

pub use pawtrack_intelligence::*;

pub use pawtrack_intelligence::{metrics, pattern_detection};
