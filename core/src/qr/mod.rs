//! QR rendering on top of the `qrcode` crate.
//!
//! The three output encodings (base64 data URL, PNG bytes, SVG markup) are
//! alternate views of one encode operation: each derives from the same
//! module matrix, so the payload bits are identical for identical input.

use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};

use crate::content::{format, QrContent};
use crate::{Error, Result};

mod render;

/// Character ceiling for a single QR symbol. Longer content is rejected
/// before the encoder runs; the encoder never truncates.
pub const MAX_CONTENT_LEN: usize = 4296;

/// Error-correction classes, in increasing redundancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }

    fn ec_level(self) -> EcLevel {
        match self {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

impl std::str::FromStr for ErrorCorrection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "L" | "l" => Ok(ErrorCorrection::L),
            "M" | "m" => Ok(ErrorCorrection::M),
            "Q" | "q" => Ok(ErrorCorrection::Q),
            "H" | "h" => Ok(ErrorCorrection::H),
            other => Err(Error::Validation(format!(
                "unknown error correction level '{other}'"
            ))),
        }
    }
}

/// Module colors for rendered images, as hex strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrColors {
    pub dark: String,
    pub light: String,
}

impl Default for QrColors {
    fn default() -> Self {
        Self {
            dark: "#000000".to_string(),
            light: "#ffffff".to_string(),
        }
    }
}

/// Rendering configuration; pure options, no state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrOptions {
    /// Image width (and height) in pixels
    pub width: u32,
    /// Quiet-zone margin in modules
    pub margin: u32,
    #[serde(rename = "errorCorrectionLevel")]
    pub error_correction: ErrorCorrection,
    pub color: QrColors,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: 512,
            margin: 2,
            error_correction: ErrorCorrection::default(),
            color: QrColors::default(),
        }
    }
}

/// Requested output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrFormat {
    DataUrl,
    Png,
    Svg,
}

/// A rendered QR image
#[derive(Debug, Clone)]
pub enum QrImage {
    DataUrl(String),
    Png(Vec<u8>),
    Svg(String),
}

/// Render a canonical string as a base64 PNG data URL.
pub fn render_data_url(text: &str, options: &QrOptions) -> Result<String> {
    let code = encode(text, options)?;
    render::to_data_url(&code, options)
}

/// Render a canonical string as PNG bytes.
pub fn render_png(text: &str, options: &QrOptions) -> Result<Vec<u8>> {
    let code = encode(text, options)?;
    render::to_png(&code, options)
}

/// Render a canonical string as SVG markup.
pub fn render_svg(text: &str, options: &QrOptions) -> Result<String> {
    let code = encode(text, options)?;
    Ok(render::to_svg(&code, options))
}

/// Render a canonical string in the requested encoding.
pub fn render(text: &str, output: QrFormat, options: &QrOptions) -> Result<QrImage> {
    Ok(match output {
        QrFormat::DataUrl => QrImage::DataUrl(render_data_url(text, options)?),
        QrFormat::Png => QrImage::Png(render_png(text, options)?),
        QrFormat::Svg => QrImage::Svg(render_svg(text, options)?),
    })
}

/// Format typed content and render it in one step.
pub fn generate(content: &QrContent, output: QrFormat, options: &QrOptions) -> Result<QrImage> {
    render(&format::format_content(content), output, options)
}

fn encode(text: &str, options: &QrOptions) -> Result<QrCode> {
    let length = text.chars().count();
    if length > MAX_CONTENT_LEN {
        return Err(Error::Validation(format!(
            "content is too long for a QR code ({length} characters, max {MAX_CONTENT_LEN})"
        )));
    }

    QrCode::with_error_correction_level(text, options.error_correction.ec_level()).map_err(|e| {
        Error::Encode(format!(
            "{e} ({length} characters at level {})",
            options.error_correction.as_str()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

    #[test]
    fn test_data_url_shape() {
        let data_url = render_data_url("https://example.com", &QrOptions::default()).unwrap();
        assert!(data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_png_signature_and_size() {
        let options = QrOptions::default();
        let png = render_png("https://example.com", &options).unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);

        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.width() >= options.width);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_svg_markup() {
        let options = QrOptions::default();
        let svg = render_svg("https://example.com", &options).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("fill=\"#000000\""));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_data_url_wraps_the_png_encoding() {
        let options = QrOptions::default();
        let png = render_png("HELLO", &options).unwrap();
        let data_url = render_data_url("HELLO", &options).unwrap();

        let encoded = data_url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), png);
    }

    #[test]
    fn test_overlong_content_rejected_before_encode() {
        let options = QrOptions {
            error_correction: ErrorCorrection::H,
            ..QrOptions::default()
        };
        let err = render_svg(&"A".repeat(MAX_CONTENT_LEN + 1), &options).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_capacity_boundary_at_level_l() {
        // 4296 alphanumeric characters exactly fills a version 40-L symbol
        let options = QrOptions {
            error_correction: ErrorCorrection::L,
            ..QrOptions::default()
        };
        assert!(render_svg(&"A".repeat(MAX_CONTENT_LEN), &options).is_ok());
    }

    #[test]
    fn test_capacity_overflow_surfaces_encode_error() {
        // Passes the length pre-check but exceeds what level H can hold
        let options = QrOptions {
            error_correction: ErrorCorrection::H,
            ..QrOptions::default()
        };
        let err = render_svg(&"A".repeat(MAX_CONTENT_LEN), &options).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
        assert!(err.to_string().starts_with("QR generation failed: "));
    }

    #[test]
    fn test_generate_formats_typed_content() {
        let content = crate::content::QrContent::Url("example.com".to_string());
        let image = generate(&content, QrFormat::Svg, &QrOptions::default()).unwrap();
        assert!(matches!(image, QrImage::Svg(_)));
    }
}
