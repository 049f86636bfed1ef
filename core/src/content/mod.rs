//! Typed QR content: the closed category set, per-category payload shapes,
//! and the boundary constructor that turns raw request data into a
//! well-typed value exactly once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub mod format;

mod validate;

pub use validate::validate_content;

/// Closed set of supported QR content categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QrContentType {
    Text,
    Url,
    Email,
    Phone,
    Sms,
    Whatsapp,
    Telegram,
    Wifi,
    Bank,
    Youtube,
    Instagram,
    Tiktok,
    Linkedin,
    Github,
    File,
}

impl QrContentType {
    pub const ALL: [QrContentType; 15] = [
        QrContentType::Text,
        QrContentType::Url,
        QrContentType::Email,
        QrContentType::Phone,
        QrContentType::Sms,
        QrContentType::Whatsapp,
        QrContentType::Telegram,
        QrContentType::Wifi,
        QrContentType::Bank,
        QrContentType::Youtube,
        QrContentType::Instagram,
        QrContentType::Tiktok,
        QrContentType::Linkedin,
        QrContentType::Github,
        QrContentType::File,
    ];

    /// Wire-format tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            QrContentType::Text => "TEXT",
            QrContentType::Url => "URL",
            QrContentType::Email => "EMAIL",
            QrContentType::Phone => "PHONE",
            QrContentType::Sms => "SMS",
            QrContentType::Whatsapp => "WHATSAPP",
            QrContentType::Telegram => "TELEGRAM",
            QrContentType::Wifi => "WIFI",
            QrContentType::Bank => "BANK",
            QrContentType::Youtube => "YOUTUBE",
            QrContentType::Instagram => "INSTAGRAM",
            QrContentType::Tiktok => "TIKTOK",
            QrContentType::Linkedin => "LINKEDIN",
            QrContentType::Github => "GITHUB",
            QrContentType::File => "FILE",
        }
    }
}

impl std::fmt::Display for QrContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for QrContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        QrContentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation(format!("unknown content type '{s}'")))
    }
}

/// Email payload with optional pre-filled subject and body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailContent {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// SMS payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsContent {
    pub phone: String,
    pub message: String,
}

/// WhatsApp payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsappContent {
    pub phone: String,
    pub message: String,
}

/// Telegram payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramContent {
    pub username: String,
    pub message: String,
}

/// WiFi network credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiContent {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub encryption: WifiEncryption,
    #[serde(default)]
    pub hidden: bool,
}

/// WiFi encryption modes understood by the `WIFI:` format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[serde(rename = "WEP")]
    Wep,
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WPA2")]
    Wpa2,
    #[serde(rename = "nopass")]
    Nopass,
}

impl WifiEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiEncryption::Wep => "WEP",
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wpa2 => "WPA2",
            WifiEncryption::Nopass => "nopass",
        }
    }
}

/// Bank transfer details for the display-only `BANK:` block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankContent {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// YouTube payload: a raw 11-char video id or any common video URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeContent {
    pub video_id: String,
}

/// Instagram payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramContent {
    pub username: String,
}

/// TikTok payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiktokContent {
    pub username: String,
}

/// LinkedIn payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinContent {
    pub profile_url: String,
}

/// GitHub payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubContent {
    pub username: String,
}

/// Tagged QR content, one variant per category.
///
/// The payload shape always matches the tag; [`QrContent::from_parts`] is
/// the only place raw request data is checked against a shape, so the
/// formatters downstream never need defensive field checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QrContent {
    Text(String),
    Url(String),
    Email(EmailContent),
    Phone(String),
    Sms(SmsContent),
    Whatsapp(WhatsappContent),
    Telegram(TelegramContent),
    Wifi(WifiContent),
    Bank(BankContent),
    Youtube(YoutubeContent),
    Instagram(InstagramContent),
    Tiktok(TiktokContent),
    Linkedin(LinkedinContent),
    Github(GithubContent),
    File(String),
}

impl QrContent {
    /// The category tag this payload belongs to.
    pub fn content_type(&self) -> QrContentType {
        match self {
            QrContent::Text(_) => QrContentType::Text,
            QrContent::Url(_) => QrContentType::Url,
            QrContent::Email(_) => QrContentType::Email,
            QrContent::Phone(_) => QrContentType::Phone,
            QrContent::Sms(_) => QrContentType::Sms,
            QrContent::Whatsapp(_) => QrContentType::Whatsapp,
            QrContent::Telegram(_) => QrContentType::Telegram,
            QrContent::Wifi(_) => QrContentType::Wifi,
            QrContent::Bank(_) => QrContentType::Bank,
            QrContent::Youtube(_) => QrContentType::Youtube,
            QrContent::Instagram(_) => QrContentType::Instagram,
            QrContent::Tiktok(_) => QrContentType::Tiktok,
            QrContent::Linkedin(_) => QrContentType::Linkedin,
            QrContent::Github(_) => QrContentType::Github,
            QrContent::File(_) => QrContentType::File,
        }
    }

    /// Build typed content from a tag and the raw payload value received
    /// at the request boundary.
    pub fn from_parts(content_type: QrContentType, value: serde_json::Value) -> Result<Self> {
        let content = match content_type {
            QrContentType::Text => QrContent::Text(expect_string(content_type, value)?),
            QrContentType::Url => QrContent::Url(expect_string(content_type, value)?),
            QrContentType::Phone => QrContent::Phone(expect_string(content_type, value)?),
            QrContentType::File => QrContent::File(expect_string(content_type, value)?),
            QrContentType::Email => QrContent::Email(payload(content_type, value)?),
            QrContentType::Sms => QrContent::Sms(payload(content_type, value)?),
            QrContentType::Whatsapp => QrContent::Whatsapp(payload(content_type, value)?),
            QrContentType::Telegram => QrContent::Telegram(payload(content_type, value)?),
            QrContentType::Wifi => QrContent::Wifi(payload(content_type, value)?),
            QrContentType::Bank => QrContent::Bank(payload(content_type, value)?),
            QrContentType::Youtube => QrContent::Youtube(payload(content_type, value)?),
            QrContentType::Instagram => QrContent::Instagram(payload(content_type, value)?),
            QrContentType::Tiktok => QrContent::Tiktok(payload(content_type, value)?),
            QrContentType::Linkedin => QrContent::Linkedin(payload(content_type, value)?),
            QrContentType::Github => QrContent::Github(payload(content_type, value)?),
        };
        Ok(content)
    }

    /// The persisted form: the plain string for string-shaped categories,
    /// the JSON-stringified payload for everything else.
    pub fn stored_content(&self) -> Result<String> {
        match self {
            QrContent::Text(s)
            | QrContent::Url(s)
            | QrContent::Phone(s)
            | QrContent::File(s) => Ok(s.clone()),
            QrContent::Email(data) => Ok(serde_json::to_string(data)?),
            QrContent::Sms(data) => Ok(serde_json::to_string(data)?),
            QrContent::Whatsapp(data) => Ok(serde_json::to_string(data)?),
            QrContent::Telegram(data) => Ok(serde_json::to_string(data)?),
            QrContent::Wifi(data) => Ok(serde_json::to_string(data)?),
            QrContent::Bank(data) => Ok(serde_json::to_string(data)?),
            QrContent::Youtube(data) => Ok(serde_json::to_string(data)?),
            QrContent::Instagram(data) => Ok(serde_json::to_string(data)?),
            QrContent::Tiktok(data) => Ok(serde_json::to_string(data)?),
            QrContent::Linkedin(data) => Ok(serde_json::to_string(data)?),
            QrContent::Github(data) => Ok(serde_json::to_string(data)?),
        }
    }
}

fn expect_string(content_type: QrContentType, value: serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        _ => Err(Error::Validation(format!(
            "{content_type} content must be a plain string"
        ))),
    }
}

fn payload<T: DeserializeOwned>(content_type: QrContentType, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::Validation(format!("malformed {content_type} payload: {e}")))
}
