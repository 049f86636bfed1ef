//! Append-only activity log.
//!
//! JSON lines under the data directory; one entry per user-facing action.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

use super::now_unix;

const ACTIVITY_FILE: &str = "activity.jsonl";

/// Action categories recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    QrCreated,
    QrDeleted,
    FileUploaded,
    FileDeleted,
    Error,
}

/// One recorded action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: Uuid,
    pub action: ActivityAction,
    pub description: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
    /// Unix seconds
    pub created_at: u64,
}

/// Append-only JSON-lines log under the data directory
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(ACTIVITY_FILE),
        })
    }

    /// Append one entry.
    pub fn record(
        &self,
        action: ActivityAction,
        description: impl Into<String>,
        metadata: serde_json::Value,
    ) -> Result<ActivityEntry> {
        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            action,
            description: description.into(),
            metadata,
            created_at: now_unix(),
        };

        let mut line = serde_json::to_vec(&entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;

        Ok(entry)
    }

    /// Newest-first slice of the log.
    pub fn recent(&self, limit: usize, offset: usize) -> Result<Vec<ActivityEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let entry: ActivityEntry = serde_json::from_str(line)
                .map_err(|e| Error::Store(format!("corrupt activity entry: {e}")))?;
            entries.push(entry);
        }

        entries.reverse();
        Ok(entries.into_iter().skip(offset).take(limit).collect())
    }
}
