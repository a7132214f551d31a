// ABOUTME: Pawtrack CLI - record pet health check-ins and manage the daily care schedule
// ABOUTME: Reads and writes the JSON stores under the configured data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors
//!
//! Usage:
//! ```bash
//! # Summarize the last three months of check-ins
//! pawtrack-cli health summary --window 3m
//!
//! # Record a check-in
//! pawtrack-cli health add --weight 32.4 --temperature 38.6 --heart-rate 92 --symptom coughing
//!
//! # Show tomorrow's reminders
//! pawtrack-cli schedule show --tab tomorrow
//!
//! # Add a weekday walk at 07:30
//! pawtrack-cli schedule add --title "Morning walk" --time 07:30 \
//!     --days mon,tue,wed,thu,fri --category exercise
//!
//! # Mark a reminder done
//! pawtrack-cli schedule toggle-complete 5f0c...
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use pawtrack::config::PawtrackConfig;
use pawtrack::intelligence::TimeWindow;
use pawtrack::logging::LoggingConfig;
use pawtrack::models::{Priority, ReminderTime};
use pawtrack::stores::JsonFileStore;
use pawtrack::view_state::ScheduleTab;
use std::env;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pawtrack-cli",
    about = "Pet health tracking and care scheduling",
    long_about = "Record daily health check-ins, review windowed health summaries, \
                  and manage care reminders."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Health record commands
    Health {
        #[command(subcommand)]
        action: HealthCommand,
    },

    /// Reminder schedule commands
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommand,
    },
}

#[derive(Subcommand)]
enum HealthCommand {
    /// Summarize metrics, anomalies, and symptoms over a time window
    Summary {
        /// Time window (1w, 1m, 3m, 1y)
        #[arg(long)]
        window: Option<TimeWindow>,

        /// Number of symptoms to list
        #[arg(long)]
        top: Option<usize>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a health check-in
    Add(commands::health::AddRecordArgs),
}

#[derive(Subcommand)]
enum ScheduleCommand {
    /// Show reminders for a tab, grouped by time
    Show {
        /// Tab to show (today, tomorrow, upcoming, date)
        #[arg(long)]
        tab: Option<ScheduleTab>,

        /// Calendar date (YYYY-MM-DD); implies the date tab
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Upcoming horizon in days
        #[arg(long)]
        days: Option<u32>,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a reminder
    Add {
        /// Reminder title
        #[arg(long)]
        title: String,

        /// Time of day (HH:MM)
        #[arg(long, default_value = "08:00")]
        time: ReminderTime,

        /// Comma-separated days for a recurring reminder (default: every day)
        #[arg(long, value_delimiter = ',', conflicts_with = "date")]
        days: Vec<String>,

        /// Date for a one-time reminder (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Category (feeding, medication, exercise, grooming, vet, training, other)
        #[arg(long)]
        category: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<Priority>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Flip a reminder's completed flag
    ToggleComplete {
        /// Reminder ID
        id: String,
    },

    /// Flip a reminder's enabled flag
    ToggleEnabled {
        /// Reminder ID
        id: String,
    },

    /// Delete a reminder
    Delete {
        /// Reminder ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = PawtrackConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let mut logging = LoggingConfig::from_env();
    if env::var("RUST_LOG").is_err() || cli.verbose > 0 {
        logging = logging.with_level(config.log_level.raised_by(cli.verbose).to_string());
    }
    logging.init()?;
    config.log_loaded();
    debug!("{}", config.summary());

    let store = JsonFileStore::open(&config.data_dir).await?;

    match cli.command {
        Command::Health { action } => match action {
            HealthCommand::Summary { window, top, json } => {
                commands::health::summary(&store, &config, window, top, json).await?;
            }
            HealthCommand::Add(args) => {
                commands::health::add(&store, args).await?;
            }
        },
        Command::Schedule { action } => match action {
            ScheduleCommand::Show {
                tab,
                date,
                days,
                json,
            } => {
                commands::schedule::show(&store, &config, tab, date, days, json).await?;
            }
            ScheduleCommand::Add {
                title,
                time,
                days,
                date,
                category,
                priority,
                notes,
            } => {
                let request = commands::schedule::AddReminderRequest {
                    title,
                    time,
                    days,
                    date,
                    category,
                    priority,
                    notes,
                };
                commands::schedule::add(&store, request).await?;
            }
            ScheduleCommand::ToggleComplete { id } => {
                commands::schedule::toggle_complete(&store, &id).await?;
            }
            ScheduleCommand::ToggleEnabled { id } => {
                commands::schedule::toggle_enabled(&store, &id).await?;
            }
            ScheduleCommand::Delete { id } => {
                commands::schedule::delete(&store, &id).await?;
            }
        },
    }

    Ok(())
}
