//! High-level service that coordinates all components: boundary
//! validation, formatting, rendering, Drive upload, record keeping and
//! the activity log.

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::content::{self, QrContent, QrContentType};
use crate::drive::{DriveClient, DriveCredential, DriveUploadResult};
use crate::qr::{self, QrOptions};
use crate::store::{
    now_unix, ActivityAction, ActivityEntry, ActivityLog, QrRecord, QrStore, RecordPage,
    RecordQuery, TypeCount,
};
use crate::{Config, Result};

/// Dashboard summary over the stored records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub uploads: usize,
    /// Most frequent categories first
    pub type_breakdown: Vec<TypeCount>,
    /// Latest FILE records, newest first
    pub recent_uploads: Vec<QrRecord>,
}

/// Main qrdrop service; stateless between calls apart from the store
pub struct QrService {
    config: Config,
    store: QrStore,
    activity: ActivityLog,
}

impl QrService {
    /// Open a service rooted at the configured data directory.
    pub fn new(config: Config) -> Result<Self> {
        let store = QrStore::open(&config.data_dir)?;
        let activity = ActivityLog::open(&config.data_dir)?;
        Ok(Self {
            config,
            store,
            activity,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate, format, render and persist one typed QR code.
    pub fn generate(&self, content: &QrContent, options: &QrOptions) -> Result<QrRecord> {
        self.generate_record(content, options, None, None)
    }

    /// Upload a file to Drive, then run its shareable link through the
    /// regular FILE generation path.
    pub async fn upload_and_generate(
        &self,
        data: Vec<u8>,
        file_name: &str,
        mime_type: &str,
        credential: DriveCredential,
        options: &QrOptions,
    ) -> Result<(DriveUploadResult, QrRecord)> {
        let client = DriveClient::new(credential);
        let uploaded = match client
            .upload(data, file_name, mime_type, self.config.drive_folder.as_deref())
            .await
        {
            Ok(uploaded) => uploaded,
            Err(e) => {
                let _ = self.activity.record(
                    ActivityAction::Error,
                    format!("upload of {file_name} failed"),
                    json!({ "error": e.to_string() }),
                );
                return Err(e);
            }
        };

        self.activity.record(
            ActivityAction::FileUploaded,
            format!("uploaded {} to Google Drive", uploaded.file_name),
            json!({ "fileId": uploaded.file_id, "fileName": uploaded.file_name }),
        )?;

        let content = QrContent::File(uploaded.shareable_link.clone());
        let record = self.generate_record(
            &content,
            options,
            Some(uploaded.shareable_link.clone()),
            Some(uploaded.file_name.clone()),
        )?;

        Ok((uploaded, record))
    }

    /// Page through generated codes.
    pub fn history(&self, query: &RecordQuery) -> Result<RecordPage> {
        self.store.query(query)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<QrRecord>> {
        self.store.get(id)
    }

    /// Newest-first activity entries.
    pub fn recent_activity(&self, limit: usize, offset: usize) -> Result<Vec<ActivityEntry>> {
        self.activity.recent(limit, offset)
    }

    /// Delete a stored record; any uploaded Drive file is untouched.
    pub fn delete(&self, id: Uuid) -> Result<Option<QrRecord>> {
        let Some(removed) = self.store.delete(id)? else {
            return Ok(None);
        };

        self.activity.record(
            ActivityAction::QrDeleted,
            format!("deleted {} QR code", removed.content_type),
            json!({ "qrId": removed.id }),
        )?;
        tracing::info!("deleted QR record {}", removed.id);
        Ok(Some(removed))
    }

    /// Remove a remote Drive file and record the action.
    pub async fn delete_drive_file(
        &self,
        file_id: &str,
        credential: DriveCredential,
    ) -> Result<()> {
        DriveClient::new(credential).delete(file_id).await?;
        self.activity.record(
            ActivityAction::FileDeleted,
            format!("deleted Drive file {file_id}"),
            json!({ "fileId": file_id }),
        )?;
        Ok(())
    }

    /// Dashboard summary: totals, per-type counts, recent uploads.
    pub fn stats(&self) -> Result<DashboardStats> {
        let records = self.store.records()?;

        let mut type_breakdown: Vec<TypeCount> = Vec::new();
        for record in &records {
            match type_breakdown
                .iter_mut()
                .find(|c| c.content_type == record.content_type)
            {
                Some(entry) => entry.count += 1,
                None => type_breakdown.push(TypeCount {
                    content_type: record.content_type,
                    count: 1,
                }),
            }
        }
        type_breakdown.sort_by(|a, b| b.count.cmp(&a.count));

        let uploads = records
            .iter()
            .filter(|r| r.content_type == QrContentType::File)
            .count();
        let recent_uploads = records
            .iter()
            .filter(|r| r.content_type == QrContentType::File)
            .take(5)
            .cloned()
            .collect();

        Ok(DashboardStats {
            total: records.len(),
            uploads,
            type_breakdown,
            recent_uploads,
        })
    }

    fn generate_record(
        &self,
        content: &QrContent,
        options: &QrOptions,
        file_url: Option<String>,
        file_name: Option<String>,
    ) -> Result<QrRecord> {
        content::validate_content(content)?;

        let canonical = content::format::format_content(content);
        let qr_image = match qr::render_data_url(&canonical, options) {
            Ok(data_url) => data_url,
            Err(e) => {
                let _ = self.activity.record(
                    ActivityAction::Error,
                    format!("QR generation failed for {} content", content.content_type()),
                    json!({ "error": e.to_string() }),
                );
                return Err(e);
            }
        };

        let record = QrRecord {
            id: Uuid::new_v4(),
            content_type: content.content_type(),
            content: content.stored_content()?,
            qr_image,
            file_url,
            file_name,
            created_at: now_unix(),
        };
        self.store.insert(record.clone())?;

        self.activity.record(
            ActivityAction::QrCreated,
            format!("generated {} QR code", record.content_type),
            json!({ "qrId": record.id, "qrType": record.content_type }),
        )?;
        tracing::info!("generated {} QR code {}", record.content_type, record.id);

        Ok(record)
    }
}
