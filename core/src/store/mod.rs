//! Record keeping for generated QR codes.
//!
//! A JSON file under the configured data directory; the store owns record
//! lifecycle (create, query, delete) and nothing else in the crate holds
//! state between calls.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::QrContentType;
use crate::{Error, Result};

mod activity;

pub use activity::{ActivityAction, ActivityEntry, ActivityLog};

const RECORDS_FILE: &str = "qrcodes.json";

/// A generated code as persisted; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub content_type: QrContentType,
    /// Canonical string or JSON-stringified payload
    pub content: String,
    /// Rendered data URL
    pub qr_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Unix seconds
    pub created_at: u64,
}

/// History query: filter, search, paginate
#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub content_type: Option<QrContentType>,
    /// Case-insensitive substring match over content, file name and file URL
    pub search: Option<String>,
    /// 1-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            content_type: None,
            search: None,
            page: 1,
            page_size: 20,
        }
    }
}

/// One page of query results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub items: Vec<QrRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_more: bool,
}

/// Per-type count for the dashboard view
#[derive(Debug, Clone, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub content_type: QrContentType,
    pub count: usize,
}

/// File-backed store of generated codes
pub struct QrStore {
    path: PathBuf,
}

impl QrStore {
    /// Open the store, creating the data directory if needed.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(RECORDS_FILE),
        })
    }

    /// Persist a new record.
    pub fn insert(&self, record: QrRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<QrRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    /// Remove a record, returning it when it existed.
    pub fn delete(&self, id: Uuid) -> Result<Option<QrRecord>> {
        let mut records = self.load()?;
        let Some(pos) = records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let removed = records.remove(pos);
        self.save(&records)?;
        Ok(Some(removed))
    }

    /// All records, newest first.
    pub fn records(&self) -> Result<Vec<QrRecord>> {
        let mut records = self.load()?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Newest-first filtered page of records.
    pub fn query(&self, query: &RecordQuery) -> Result<RecordPage> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let matches: Vec<QrRecord> = self
            .records()?
            .into_iter()
            .filter(|r| query.content_type.map_or(true, |t| r.content_type == t))
            .filter(|r| match &needle {
                None => true,
                Some(needle) => {
                    r.content.to_lowercase().contains(needle)
                        || matches_option(r.file_name.as_deref(), needle)
                        || matches_option(r.file_url.as_deref(), needle)
                }
            })
            .collect();

        let total = matches.len();
        let page = query.page.max(1);
        let page_size = query.page_size.clamp(1, 100);
        let skip = (page - 1) * page_size;
        let items: Vec<QrRecord> = matches.into_iter().skip(skip).take(page_size).collect();
        let has_more = skip + items.len() < total;

        Ok(RecordPage {
            items,
            page,
            page_size,
            total,
            has_more,
        })
    }

    fn load(&self) -> Result<Vec<QrRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Store(format!("corrupt record file {}: {e}", self.path.display())))
    }

    fn save(&self, records: &[QrRecord]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

fn matches_option(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Current time as unix seconds.
pub(crate) fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content_type: QrContentType, content: &str, created_at: u64) -> QrRecord {
        QrRecord {
            id: Uuid::new_v4(),
            content_type,
            content: content.to_string(),
            qr_image: "data:image/png;base64,AAAA".to_string(),
            file_url: None,
            file_name: None,
            created_at,
        }
    }

    fn open_store() -> (tempfile::TempDir, QrStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = QrStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_insert_get_delete() {
        let (_dir, store) = open_store();
        let rec = record(QrContentType::Text, "hello", 100);
        let id = rec.id;

        store.insert(rec).unwrap();
        assert_eq!(store.get(id).unwrap().unwrap().content, "hello");

        let removed = store.delete(id).unwrap().unwrap();
        assert_eq!(removed.id, id);
        assert!(store.get(id).unwrap().is_none());
        assert!(store.delete(id).unwrap().is_none());
    }

    #[test]
    fn test_query_orders_newest_first() {
        let (_dir, store) = open_store();
        store.insert(record(QrContentType::Text, "old", 100)).unwrap();
        store.insert(record(QrContentType::Text, "new", 200)).unwrap();

        let page = store.query(&RecordQuery::default()).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].content, "new");
        assert_eq!(page.items[1].content, "old");
    }

    #[test]
    fn test_query_type_filter_and_search() {
        let (_dir, store) = open_store();
        store
            .insert(record(QrContentType::Url, "https://example.com", 1))
            .unwrap();
        store
            .insert(record(QrContentType::Text, "Example note", 2))
            .unwrap();

        let mut file_rec = record(QrContentType::File, "https://drive.google.com/x", 3);
        file_rec.file_name = Some("Report.pdf".to_string());
        store.insert(file_rec).unwrap();

        let by_type = store
            .query(&RecordQuery {
                content_type: Some(QrContentType::Url),
                ..RecordQuery::default()
            })
            .unwrap();
        assert_eq!(by_type.total, 1);

        let by_search = store
            .query(&RecordQuery {
                search: Some("example".to_string()),
                ..RecordQuery::default()
            })
            .unwrap();
        assert_eq!(by_search.total, 2);

        let by_file_name = store
            .query(&RecordQuery {
                search: Some("report".to_string()),
                ..RecordQuery::default()
            })
            .unwrap();
        assert_eq!(by_file_name.total, 1);
        assert_eq!(by_file_name.items[0].content_type, QrContentType::File);
    }

    #[test]
    fn test_query_pagination() {
        let (_dir, store) = open_store();
        for i in 0..5 {
            store
                .insert(record(QrContentType::Text, &format!("note {i}"), i))
                .unwrap();
        }

        let first = store
            .query(&RecordQuery {
                page: 1,
                page_size: 2,
                ..RecordQuery::default()
            })
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 5);
        assert!(first.has_more);

        let last = store
            .query(&RecordQuery {
                page: 3,
                page_size: 2,
                ..RecordQuery::default()
            })
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_more);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = QrStore::open(dir.path()).unwrap();
            store.insert(record(QrContentType::Text, "kept", 1)).unwrap();
        }
        let store = QrStore::open(dir.path()).unwrap();
        assert_eq!(store.records().unwrap().len(), 1);
    }
}
