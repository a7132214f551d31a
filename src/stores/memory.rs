// ABOUTME: In-memory record and reminder store for tests and ephemeral sessions
// ABOUTME: Shares state behind a tokio RwLock so clones see the same data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{
    patch_reminder, prepend_record, prepend_reminder, remove_reminder, RecordStore, ReminderPatch,
    ReminderStore,
};
use crate::errors::AppResult;
use crate::models::{HealthRecord, Reminder};

#[derive(Debug, Default)]
struct State {
    records: Vec<HealthRecord>,
    reminders: Vec<Reminder>,
}

/// Process-local store; cloning shares the same underlying data
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing data, kept in the given order
    #[must_use]
    pub fn with_data(records: Vec<HealthRecord>, reminders: Vec<Reminder>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State { records, reminders })),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn records(&self) -> AppResult<Vec<HealthRecord>> {
        Ok(self.state.read().await.records.clone())
    }

    async fn add_record(&self, record: HealthRecord) -> AppResult<()> {
        let id = record.id.clone();
        prepend_record(&mut self.state.write().await.records, record)?;
        debug!(record_id = %id, "Added health record");
        Ok(())
    }
}

#[async_trait]
impl ReminderStore for InMemoryStore {
    async fn reminders(&self) -> AppResult<Vec<Reminder>> {
        Ok(self.state.read().await.reminders.clone())
    }

    async fn add_reminder(&self, reminder: Reminder) -> AppResult<()> {
        let id = reminder.id.clone();
        prepend_reminder(&mut self.state.write().await.reminders, reminder)?;
        debug!(reminder_id = %id, "Added reminder");
        Ok(())
    }

    async fn update_reminder(&self, id: &str, patch: ReminderPatch) -> AppResult<Reminder> {
        patch_reminder(&mut self.state.write().await.reminders, id, patch)
    }

    async fn delete_reminder(&self, id: &str) -> AppResult<Reminder> {
        let removed = remove_reminder(&mut self.state.write().await.reminders, id)?;
        debug!(reminder_id = %id, "Deleted reminder");
        Ok(removed)
    }
}
