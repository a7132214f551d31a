// ABOUTME: Data model re-exports from pawtrack-core
// ABOUTME: Health records, reminders, recurrence, categories, and priorities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

pub use pawtrack_core::models::*;
