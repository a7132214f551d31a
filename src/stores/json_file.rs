// ABOUTME: JSON file store persisting records.json and reminders.json under a data directory
// ABOUTME: Whole-file read-modify-write guarded by a tokio mutex, replaced atomically via rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawtrack Contributors

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{
    patch_reminder, prepend_record, prepend_reminder, remove_reminder, RecordStore, ReminderPatch,
    ReminderStore,
};
use crate::constants::storage::{RECORDS_FILE, REMINDERS_FILE};
use crate::errors::{AppError, AppResult};
use crate::models::{HealthRecord, Reminder};

/// Store backed by two JSON array files
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}",
                data_dir.display()
            ))
            .with_source(e)
        })?;
        info!(data_dir = %data_dir.display(), "Opened JSON file store");
        Ok(Self {
            data_dir,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Directory holding the store files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the health record file
    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(RECORDS_FILE)
    }

    /// Path of the reminder file
    #[must_use]
    pub fn reminders_path(&self) -> PathBuf {
        self.data_dir.join(REMINDERS_FILE)
    }
}

/// A missing file reads as an empty list
async fn read_list<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(
                AppError::storage(format!("Failed to read {}", path.display())).with_source(e),
            )
        }
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::serialization(format!("Malformed JSON in {}", path.display())).with_source(e)
    })
}

async fn write_list<T: Serialize + Sync>(path: &Path, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(items)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, json).await.map_err(|e| {
        AppError::storage(format!("Failed to write {}", staging.display())).with_source(e)
    })?;
    fs::rename(&staging, path).await.map_err(|e| {
        AppError::storage(format!("Failed to replace {}", path.display())).with_source(e)
    })?;
    debug!(path = %path.display(), count = items.len(), "Wrote store file");
    Ok(())
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn records(&self) -> AppResult<Vec<HealthRecord>> {
        read_list(&self.records_path()).await
    }

    async fn add_record(&self, record: HealthRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.records_path();
        let mut records: Vec<HealthRecord> = read_list(&path).await?;
        let id = record.id.clone();
        prepend_record(&mut records, record)?;
        write_list(&path, &records).await?;
        info!(record_id = %id, "Saved health record");
        Ok(())
    }
}

#[async_trait]
impl ReminderStore for JsonFileStore {
    async fn reminders(&self) -> AppResult<Vec<Reminder>> {
        read_list(&self.reminders_path()).await
    }

    async fn add_reminder(&self, reminder: Reminder) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.reminders_path();
        let mut reminders: Vec<Reminder> = read_list(&path).await?;
        let id = reminder.id.clone();
        prepend_reminder(&mut reminders, reminder)?;
        write_list(&path, &reminders).await?;
        info!(reminder_id = %id, "Saved reminder");
        Ok(())
    }

    async fn update_reminder(&self, id: &str, patch: ReminderPatch) -> AppResult<Reminder> {
        let _guard = self.write_lock.lock().await;
        let path = self.reminders_path();
        let mut reminders: Vec<Reminder> = read_list(&path).await?;
        let updated = patch_reminder(&mut reminders, id, patch)?;
        write_list(&path, &reminders).await?;
        info!(reminder_id = %id, "Updated reminder");
        Ok(updated)
    }

    async fn delete_reminder(&self, id: &str) -> AppResult<Reminder> {
        let _guard = self.write_lock.lock().await;
        let path = self.reminders_path();
        let mut reminders: Vec<Reminder> = read_list(&path).await?;
        let removed = remove_reminder(&mut reminders, id)?;
        write_list(&path, &reminders).await?;
        info!(reminder_id = %id, "Deleted reminder");
        Ok(removed)
    }
}
