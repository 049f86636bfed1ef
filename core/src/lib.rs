//! Qrdrop Core - Typed QR code generation and Drive upload library
//!
//! This library provides the core functionality for turning typed content
//! (text, URLs, contact formats, WiFi credentials, bank details, social
//! handles, file links) into scannable QR codes, uploading files to Google
//! Drive for link-based sharing, and keeping a record of everything
//! generated.

pub mod content;
pub mod drive;
pub mod qr;
pub mod service;
pub mod store;

mod error;

pub use error::{Error, Result};

/// Configuration for the qrdrop service
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to store generated code records and the activity log
    pub data_dir: std::path::PathBuf,
    /// Drive folder receiving uploads; root of the account when unset
    pub drive_folder: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs_home().join(".qrdrop"),
            drive_folder: None,
        }
    }
}

fn dirs_home() -> std::path::PathBuf {
    dirs::home_dir().unwrap_or_else(|| std::path::PathBuf::from("."))
}

// Re-export key types for convenience
pub use content::{QrContent, QrContentType, WifiEncryption};
pub use drive::{DriveClient, DriveCredential, DriveUploadResult};
pub use qr::{ErrorCorrection, QrColors, QrFormat, QrImage, QrOptions};
pub use service::{DashboardStats, QrService};
pub use store::{ActivityAction, ActivityEntry, QrRecord, RecordPage, RecordQuery};
