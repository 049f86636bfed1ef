//! Pure formatters mapping typed content to QR-encodable strings.
//!
//! One function per category, each deterministic and side-effect free.
//! Required-field validation happens at the request boundary
//! ([`super::validate_content`]), never here.

use super::{
    BankContent, EmailContent, GithubContent, InstagramContent, LinkedinContent, QrContent,
    SmsContent, TelegramContent, TiktokContent, WhatsappContent, WifiContent, YoutubeContent,
};

/// Canonical QR string for any typed content value.
pub fn format_content(content: &QrContent) -> String {
    match content {
        QrContent::Text(text) => text.clone(),
        QrContent::Url(url) => format_url(url),
        QrContent::Email(data) => format_email(data),
        QrContent::Phone(phone) => format_phone(phone),
        QrContent::Sms(data) => format_sms(data),
        QrContent::Whatsapp(data) => format_whatsapp(data),
        QrContent::Telegram(data) => format_telegram(data),
        QrContent::Wifi(data) => format_wifi(data),
        QrContent::Bank(data) => format_bank(data),
        QrContent::Youtube(data) => format_youtube(data),
        QrContent::Instagram(data) => format_instagram(data),
        QrContent::Tiktok(data) => format_tiktok(data),
        QrContent::Linkedin(data) => format_linkedin(data),
        QrContent::Github(data) => format_github(data),
        QrContent::File(link) => link.clone(),
    }
}

/// `mailto:` link; subject and body are appended url-encoded only when
/// present and non-empty.
pub fn format_email(data: &EmailContent) -> String {
    let mut mailto = format!("mailto:{}", data.email);
    let mut params = Vec::new();

    if let Some(subject) = data.subject.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if let Some(body) = data.body.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("body={}", urlencoding::encode(body)));
    }

    if !params.is_empty() {
        mailto.push('?');
        mailto.push_str(&params.join("&"));
    }

    mailto
}

/// `tel:` link; everything except digits and a leading `+` is stripped.
pub fn format_phone(phone: &str) -> String {
    format!("tel:{}", sanitize_phone(phone))
}

/// `SMSTO:<phone>:<message>`; the message rides unescaped.
pub fn format_sms(data: &SmsContent) -> String {
    format!("SMSTO:{}:{}", sanitize_phone(&data.phone), data.message)
}

/// WhatsApp deep link with a url-encoded message.
pub fn format_whatsapp(data: &WhatsappContent) -> String {
    format!(
        "https://wa.me/{}?text={}",
        sanitize_phone(&data.phone),
        urlencoding::encode(&data.message)
    )
}

/// Telegram deep link; a leading `@` on the username is dropped.
pub fn format_telegram(data: &TelegramContent) -> String {
    format!(
        "https://t.me/{}?text={}",
        strip_handle(&data.username),
        urlencoding::encode(&data.message)
    )
}

/// `WIFI:` network descriptor per the de-facto Wi-Fi QR convention,
/// always terminated with `;;`.
pub fn format_wifi(data: &WifiContent) -> String {
    format!(
        "WIFI:T:{};S:{};P:{};H:{};;",
        data.encryption.as_str(),
        escape_wifi(&data.ssid),
        escape_wifi(&data.password),
        data.hidden,
    )
}

/// Multi-line bank transfer block. A display-only convention, not an
/// interbank payment standard.
pub fn format_bank(data: &BankContent) -> String {
    let mut block = format!(
        "BANK:{}\nACC:{}\nNAME:{}",
        data.bank_name, data.account_number, data.account_name
    );

    if let Some(amount) = data.amount.as_deref().filter(|s| !s.is_empty()) {
        block.push_str("\nAMOUNT:");
        block.push_str(amount);
    }
    if let Some(description) = data.description.as_deref().filter(|s| !s.is_empty()) {
        block.push_str("\nDESC:");
        block.push_str(description);
    }

    block
}

/// Prefix `https://` when the URL carries no protocol; idempotent.
pub fn format_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Canonical watch URL from a raw 11-char video id or a
/// `watch?v=` / `youtu.be/` / `embed/` URL.
pub fn format_youtube(data: &YoutubeContent) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        extract_youtube_id(&data.video_id)
    )
}

/// Instagram profile link; a leading `@` is dropped.
pub fn format_instagram(data: &InstagramContent) -> String {
    format!("https://instagram.com/{}", strip_handle(&data.username))
}

/// TikTok profile link; TikTok keeps the `@` in its path form.
pub fn format_tiktok(data: &TiktokContent) -> String {
    format!("https://tiktok.com/@{}", strip_handle(&data.username))
}

/// LinkedIn profile URLs pass through unchanged.
pub fn format_linkedin(data: &LinkedinContent) -> String {
    data.profile_url.clone()
}

/// GitHub profile link.
pub fn format_github(data: &GithubContent) -> String {
    format!("https://github.com/{}", data.username)
}

/// Keep digits; a single `+` survives only at the front.
fn sanitize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push(c);
        }
    }
    out
}

fn strip_handle(username: &str) -> &str {
    username.strip_prefix('@').unwrap_or(username)
}

// Backslash-escape the characters the WIFI format reserves.
fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | '"' | ',' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn is_video_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// 11-char video id from a raw id or a known URL shape; unrecognized
/// input falls through unchanged.
fn extract_youtube_id(input: &str) -> &str {
    if input.len() == 11 && input.chars().all(is_video_id_char) {
        return input;
    }

    for marker in ["youtube.com/watch?v=", "youtu.be/", "youtube.com/embed/"] {
        if let Some(pos) = input.find(marker) {
            let rest = &input[pos + marker.len()..];
            let end = rest.find(|c| !is_video_id_char(c)).unwrap_or(rest.len());
            if end >= 11 {
                return &rest[..11];
            }
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WifiEncryption;

    #[test]
    fn test_email_minimal() {
        let data = EmailContent {
            email: "a@b.com".to_string(),
            subject: None,
            body: None,
        };
        assert_eq!(format_email(&data), "mailto:a@b.com");
    }

    #[test]
    fn test_email_with_subject_and_body() {
        let data = EmailContent {
            email: "a@b.com".to_string(),
            subject: Some("Hello there".to_string()),
            body: Some("line 1 & 2".to_string()),
        };
        assert_eq!(
            format_email(&data),
            "mailto:a@b.com?subject=Hello%20there&body=line%201%20%26%202"
        );
    }

    #[test]
    fn test_email_empty_optionals_are_omitted() {
        let data = EmailContent {
            email: "a@b.com".to_string(),
            subject: Some(String::new()),
            body: None,
        };
        assert_eq!(format_email(&data), "mailto:a@b.com");
    }

    #[test]
    fn test_phone_sanitization() {
        assert_eq!(format_phone("(555) 123-4567"), "tel:5551234567");
        assert_eq!(format_phone("+84 (90) 123-4567"), "tel:+84901234567");
        assert_eq!(format_phone("+1+2"), "tel:+12");
    }

    #[test]
    fn test_sms_message_is_raw() {
        let data = SmsContent {
            phone: "555-0100".to_string(),
            message: "see you at 5: ok?".to_string(),
        };
        assert_eq!(format_sms(&data), "SMSTO:5550100:see you at 5: ok?");
    }

    #[test]
    fn test_whatsapp_encodes_message() {
        let data = WhatsappContent {
            phone: "+1 (555) 010-0000".to_string(),
            message: "hello world".to_string(),
        };
        assert_eq!(
            format_whatsapp(&data),
            "https://wa.me/+15550100000?text=hello%20world"
        );
    }

    #[test]
    fn test_telegram_strips_leading_at() {
        let data = TelegramContent {
            username: "@durov".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(format_telegram(&data), "https://t.me/durov?text=hi");
    }

    #[test]
    fn test_wifi_escaping() {
        let data = WifiContent {
            ssid: "Home;Net".to_string(),
            password: "a\"b".to_string(),
            encryption: WifiEncryption::Wpa,
            hidden: false,
        };
        assert_eq!(
            format_wifi(&data),
            "WIFI:T:WPA;S:Home\\;Net;P:a\\\"b;H:false;;"
        );
    }

    #[test]
    fn test_wifi_escapes_backslash_before_others() {
        let data = WifiContent {
            ssid: "a\\b:c,d".to_string(),
            password: String::new(),
            encryption: WifiEncryption::Nopass,
            hidden: true,
        };
        assert_eq!(
            format_wifi(&data),
            "WIFI:T:nopass;S:a\\\\b\\:c\\,d;P:;H:true;;"
        );
    }

    #[test]
    fn test_wifi_defaults() {
        let data = WifiContent {
            ssid: "Cafe".to_string(),
            password: String::new(),
            encryption: WifiEncryption::default(),
            hidden: false,
        };
        let output = format_wifi(&data);
        assert_eq!(output, "WIFI:T:WPA;S:Cafe;P:;H:false;;");
        assert!(output.ends_with(";;"));
    }

    #[test]
    fn test_bank_optional_lines_in_order() {
        let mut data = BankContent {
            bank_name: "Vietcombank".to_string(),
            account_number: "00110023456".to_string(),
            account_name: "NGUYEN VAN A".to_string(),
            amount: None,
            description: None,
        };
        assert_eq!(
            format_bank(&data),
            "BANK:Vietcombank\nACC:00110023456\nNAME:NGUYEN VAN A"
        );

        data.amount = Some("500000".to_string());
        data.description = Some("rent".to_string());
        assert_eq!(
            format_bank(&data),
            "BANK:Vietcombank\nACC:00110023456\nNAME:NGUYEN VAN A\nAMOUNT:500000\nDESC:rent"
        );
    }

    #[test]
    fn test_url_prefix_is_idempotent() {
        let once = format_url("example.com");
        assert_eq!(once, "https://example.com");
        assert_eq!(format_url(&once), once);
        assert_eq!(format_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_youtube_extraction() {
        for input in [
            "dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ] {
            let data = YoutubeContent {
                video_id: input.to_string(),
            };
            assert_eq!(
                format_youtube(&data),
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_youtube_fallback_passes_input_through() {
        let data = YoutubeContent {
            video_id: "not a video".to_string(),
        };
        assert_eq!(
            format_youtube(&data),
            "https://www.youtube.com/watch?v=not a video"
        );
    }

    #[test]
    fn test_social_links() {
        let instagram = InstagramContent {
            username: "@natgeo".to_string(),
        };
        assert_eq!(format_instagram(&instagram), "https://instagram.com/natgeo");

        let tiktok = TiktokContent {
            username: "charli".to_string(),
        };
        assert_eq!(format_tiktok(&tiktok), "https://tiktok.com/@charli");

        let github = GithubContent {
            username: "rust-lang".to_string(),
        };
        assert_eq!(format_github(&github), "https://github.com/rust-lang");

        let linkedin = LinkedinContent {
            profile_url: "https://www.linkedin.com/in/someone".to_string(),
        };
        assert_eq!(
            format_linkedin(&linkedin),
            "https://www.linkedin.com/in/someone"
        );
    }

    #[test]
    fn test_dispatch_passthrough() {
        let text = QrContent::Text("plain text".to_string());
        assert_eq!(format_content(&text), "plain text");

        let file = QrContent::File(
            "https://drive.google.com/file/d/abc123/view?usp=sharing".to_string(),
        );
        assert_eq!(
            format_content(&file),
            "https://drive.google.com/file/d/abc123/view?usp=sharing"
        );

        let url = QrContent::Url("example.com".to_string());
        assert_eq!(format_content(&url), "https://example.com");
    }
}
