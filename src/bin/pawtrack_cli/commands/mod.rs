// ABOUTME: Command modules for pawtrack-cli
// ABOUTME: Health record and reminder schedule commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

pub mod health;
pub mod schedule;
