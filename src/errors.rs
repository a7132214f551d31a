// ABOUTME: Error handling re-exports from pawtrack-core
// ABOUTME: Keeps crate::errors paths stable for binaries and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

//! # Unified Error Handling System
//!
//! Re-exports the error taxonomy defined in `pawtrack-core`.

pub use pawtrack_core::errors::{AppError, AppResult, ErrorCode};
