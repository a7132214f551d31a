// ABOUTME: Configuration module for data location, dashboard defaults, and logging level
// ABOUTME: Environment-only configuration with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

/// Environment configuration
pub mod environment;

pub use environment::{ConfigError, LogLevel, PawtrackConfig};
