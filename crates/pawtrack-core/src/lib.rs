// ABOUTME: Core types and constants for the Pawtrack pet care platform
// ABOUTME: Foundation crate with error handling, domain constants, and the data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

#![deny(unsafe_code)]

//! # Pawtrack Core
//!
//! Foundation crate providing shared types and constants for the Pawtrack
//! pet care platform. Both the metrics engine and the scheduler build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Reference ranges, window durations and form limits
//! - **models**: Health records, reminders and their value types

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`HealthRecord`, `Reminder`, `ReminderTime`, etc.)
pub mod models;
