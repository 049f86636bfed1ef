//! Google Drive upload adapter.
//!
//! Every operation is a single attempt against the Drive v3 REST API with
//! the caller's OAuth2 bearer token; there are no retries. A failure
//! part-way through an upload (after the file resource was created but
//! before its content or permissions landed) leaves the remote side in an
//! unknown state the caller must resolve.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{Error, Result};

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";

/// OAuth2 tokens bound to one Drive account.
///
/// Cloned per call and never mutated by the client; refreshing an expired
/// access token is the caller's concern.
#[derive(Clone, Serialize, Deserialize)]
pub struct DriveCredential {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for DriveCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveCredential").finish_non_exhaustive()
    }
}

/// Outcome of a completed upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveUploadResult {
    pub file_id: String,
    /// Server-confirmed name; may differ from the requested one
    pub file_name: String,
    pub shareable_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,
}

/// Remote file metadata returned by [`DriveClient::list`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub web_view_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileResource {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "thumbnailLink")]
    thumbnail_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileListResponse {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Drive API client bound to one credential
pub struct DriveClient {
    http: reqwest::Client,
    credential: DriveCredential,
}

impl DriveClient {
    pub fn new(credential: DriveCredential) -> Self {
        Self {
            http: reqwest::Client::new(),
            credential,
        }
    }

    /// Canonical viewer URL for an uploaded file.
    pub fn shareable_link(file_id: &str) -> String {
        format!("https://drive.google.com/file/d/{file_id}/view?usp=sharing")
    }

    /// Upload a byte buffer and make it link-shareable.
    ///
    /// Creates the file resource (parented under `folder_id` when given),
    /// uploads the bytes as its media content, then grants anyone-with-the-
    /// link read access. The permission grant is not undone by this module.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        mime_type: &str,
        folder_id: Option<&str>,
    ) -> Result<DriveUploadResult> {
        let mut metadata = json!({ "name": file_name });
        if let Some(folder) = folder_id {
            metadata["parents"] = json!([folder]);
        }

        let response = self
            .http
            .post(format!("{FILES_URL}?fields=id"))
            .bearer_auth(&self.credential.access_token)
            .json(&metadata)
            .send()
            .await
            .map_err(|e| Error::Upload(format!("create file: {e}")))?;
        let created: FileResource = read_json(response, "create file").await?;

        let response = self
            .http
            .patch(format!(
                "{UPLOAD_URL}/{}?uploadType=media&fields=id,name,thumbnailLink",
                created.id
            ))
            .bearer_auth(&self.credential.access_token)
            .header("Content-Type", mime_type)
            .body(data)
            .send()
            .await
            .map_err(|e| Error::Upload(format!("upload content: {e}")))?;
        let uploaded: FileResource = read_json(response, "upload content").await?;

        let response = self
            .http
            .post(format!("{FILES_URL}/{}/permissions", created.id))
            .bearer_auth(&self.credential.access_token)
            .json(&json!({ "role": "reader", "type": "anyone" }))
            .send()
            .await
            .map_err(|e| Error::Upload(format!("share file: {e}")))?;
        check_status(response, "share file").await?;

        tracing::info!("uploaded {} to Drive as {}", file_name, created.id);

        Ok(DriveUploadResult {
            shareable_link: Self::shareable_link(&created.id),
            file_id: created.id,
            file_name: uploaded.name.unwrap_or_else(|| file_name.to_string()),
            thumbnail_link: uploaded.thumbnail_link,
        })
    }

    /// Delete a remote file.
    pub async fn delete(&self, file_id: &str) -> Result<()> {
        let response = self
            .http
            .delete(format!("{FILES_URL}/{file_id}"))
            .bearer_auth(&self.credential.access_token)
            .send()
            .await
            .map_err(|e| Error::Upload(format!("delete file: {e}")))?;
        check_status(response, "delete file").await?;

        tracing::info!("deleted Drive file {}", file_id);
        Ok(())
    }

    /// List files, newest first, optionally within one folder.
    pub async fn list(&self, folder_id: Option<&str>, page_size: u32) -> Result<Vec<DriveFile>> {
        let mut request = self
            .http
            .get(FILES_URL)
            .bearer_auth(&self.credential.access_token)
            .query(&[
                ("pageSize", page_size.to_string()),
                ("orderBy", "createdTime desc".to_string()),
                (
                    "fields",
                    "files(id, name, mimeType, createdTime, webViewLink)".to_string(),
                ),
            ]);
        if let Some(folder) = folder_id {
            request = request.query(&[("q", format!("'{folder}' in parents"))]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Upload(format!("list files: {e}")))?;
        let listing: FileListResponse = read_json(response, "list files").await?;
        Ok(listing.files)
    }

    /// Cheapest round-trip that confirms the credential still works.
    pub async fn ping(&self) -> Result<()> {
        self.list(None, 1).await.map(|_| ())
    }
}

async fn check_status(response: reqwest::Response, context: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Upload(format!("{context}: HTTP {status}: {body}")))
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T> {
    let response = check_status(response, context).await?;
    response
        .json()
        .await
        .map_err(|e| Error::Upload(format!("{context}: {e}")))
}
