//! Request-boundary validation.
//!
//! Runs once, before content enters the format/render path; formatters
//! assume well-typed, validated input.

use crate::qr::MAX_CONTENT_LEN;
use crate::{Error, Result};

use super::QrContent;

/// Check required payload fields and basic shapes.
pub fn validate_content(content: &QrContent) -> Result<()> {
    match content {
        QrContent::Text(text) => require(text, "text content")?,
        QrContent::Url(url) => {
            require(url, "URL")?;
            let url = url.trim();
            if !url.starts_with("http://")
                && !url.starts_with("https://")
                && !url.contains('.')
                && !url.contains("localhost")
            {
                return Err(Error::Validation(format!("'{url}' does not look like a URL")));
            }
        }
        QrContent::Email(data) => {
            require(&data.email, "email address")?;
            if !is_plausible_email(data.email.trim()) {
                return Err(Error::Validation(format!(
                    "'{}' is not a valid email address",
                    data.email
                )));
            }
        }
        QrContent::Phone(phone) => require(phone, "phone number")?,
        QrContent::Sms(data) => {
            require(&data.phone, "phone number")?;
            require(&data.message, "message")?;
        }
        QrContent::Whatsapp(data) => {
            require(&data.phone, "phone number")?;
            require(&data.message, "message")?;
        }
        QrContent::Telegram(data) => {
            require(&data.username, "username")?;
            require(&data.message, "message")?;
        }
        QrContent::Wifi(data) => require(&data.ssid, "WiFi SSID")?,
        QrContent::Bank(data) => {
            require(&data.bank_name, "bank name")?;
            require(&data.account_number, "account number")?;
            require(&data.account_name, "account name")?;
        }
        QrContent::Youtube(data) => require(&data.video_id, "video id or URL")?,
        QrContent::Instagram(data) => require(&data.username, "username")?,
        QrContent::Tiktok(data) => require(&data.username, "username")?,
        QrContent::Github(data) => require(&data.username, "username")?,
        QrContent::Linkedin(data) => {
            require(&data.profile_url, "profile URL")?;
            let url = data.profile_url.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::Validation(
                    "LinkedIn profile URL must start with http:// or https://".to_string(),
                ));
            }
            if !url.contains("linkedin.com") {
                return Err(Error::Validation(
                    "profile URL is not a linkedin.com URL".to_string(),
                ));
            }
        }
        QrContent::File(link) => require(link, "file link")?,
    }

    if let QrContent::Text(s) | QrContent::Url(s) | QrContent::Phone(s) | QrContent::File(s) =
        content
    {
        if s.chars().count() > MAX_CONTENT_LEN {
            return Err(Error::Validation(format!(
                "content is too long for a QR code (max {MAX_CONTENT_LEN} characters)"
            )));
        }
    }

    Ok(())
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

// local@domain with a dotted domain, no whitespace
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EmailContent, LinkedinContent, SmsContent, WifiContent};
    use crate::Error;

    fn assert_rejected(content: &QrContent) {
        assert!(
            matches!(validate_content(content), Err(Error::Validation(_))),
            "expected validation failure for {content:?}"
        );
    }

    #[test]
    fn test_empty_required_fields() {
        assert_rejected(&QrContent::Text("   ".to_string()));
        assert_rejected(&QrContent::Wifi(WifiContent {
            ssid: String::new(),
            password: "secret".to_string(),
            encryption: Default::default(),
            hidden: false,
        }));
        assert_rejected(&QrContent::Sms(SmsContent {
            phone: "5550100".to_string(),
            message: "  ".to_string(),
        }));
    }

    #[test]
    fn test_email_shape() {
        assert_rejected(&QrContent::Email(EmailContent {
            email: "not-an-email".to_string(),
            subject: None,
            body: None,
        }));
        assert_rejected(&QrContent::Email(EmailContent {
            email: "a b@c.com".to_string(),
            subject: None,
            body: None,
        }));

        let ok = QrContent::Email(EmailContent {
            email: "a@b.com".to_string(),
            subject: None,
            body: None,
        });
        assert!(validate_content(&ok).is_ok());
    }

    #[test]
    fn test_url_plausibility() {
        assert_rejected(&QrContent::Url("justwords".to_string()));
        assert!(validate_content(&QrContent::Url("example.com".to_string())).is_ok());
        assert!(validate_content(&QrContent::Url("localhost:3000".to_string())).is_ok());
        assert!(validate_content(&QrContent::Url("https://anything".to_string())).is_ok());
    }

    #[test]
    fn test_linkedin_url_checks() {
        assert_rejected(&QrContent::Linkedin(LinkedinContent {
            profile_url: "linkedin.com/in/someone".to_string(),
        }));
        assert_rejected(&QrContent::Linkedin(LinkedinContent {
            profile_url: "https://example.com/in/someone".to_string(),
        }));
        let ok = QrContent::Linkedin(LinkedinContent {
            profile_url: "https://www.linkedin.com/in/someone".to_string(),
        });
        assert!(validate_content(&ok).is_ok());
    }

    #[test]
    fn test_overlong_string_content() {
        let long = "a".repeat(MAX_CONTENT_LEN + 1);
        assert_rejected(&QrContent::Text(long.clone()));
        assert!(validate_content(&QrContent::Text("a".repeat(MAX_CONTENT_LEN))).is_ok());
    }
}
