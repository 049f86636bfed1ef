//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;
use qrdrop_core::content::format::format_content;
use qrdrop_core::{qr, ErrorCorrection, QrColors, QrContent, QrContentType, QrOptions, QrService};

use crate::ui::render_terminal;

#[derive(Args)]
pub struct GenerateArgs {
    /// Content category: text, url, email, phone, sms, whatsapp, telegram,
    /// wifi, bank, youtube, instagram, tiktok, linkedin, github, file
    #[arg(short = 't', long = "type")]
    content_type: QrContentType,

    /// The content: a plain string, or a JSON object for structured types
    /// (e.g. '{"ssid": "HomeNet", "password": "hunter2"}')
    content: String,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Quiet-zone margin in modules
    #[arg(long, default_value_t = 2)]
    margin: u32,

    /// Error correction level (L, M, Q, H)
    #[arg(long, default_value = "M")]
    ec: ErrorCorrection,

    /// Dark module color (hex)
    #[arg(long, default_value = "#000000")]
    dark: String,

    /// Light module color (hex)
    #[arg(long, default_value = "#ffffff")]
    light: String,

    /// Write the image to a file (.svg extension selects SVG, anything
    /// else gets PNG)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the code to the terminal
    #[arg(long)]
    terminal: bool,
}

/// Generate a typed QR code and persist the record.
pub fn generate(service: &QrService, args: GenerateArgs) -> anyhow::Result<()> {
    let value = match serde_json::from_str::<serde_json::Value>(&args.content) {
        Ok(value @ serde_json::Value::Object(_)) => value,
        _ => serde_json::Value::String(args.content.clone()),
    };
    let content = QrContent::from_parts(args.content_type, value)?;

    let options = QrOptions {
        width: args.width,
        margin: args.margin,
        error_correction: args.ec,
        color: QrColors {
            dark: args.dark.clone(),
            light: args.light.clone(),
        },
    };

    let record = service.generate(&content, &options)?;

    println!("\x1b[1mID:\x1b[0m      {}", record.id);
    println!("\x1b[1mType:\x1b[0m    {}", record.content_type);
    println!("\x1b[1mContent:\x1b[0m {}", format_content(&content));

    if let Some(path) = &args.output {
        let canonical = format_content(&content);
        match path.extension().and_then(|e| e.to_str()) {
            Some("svg") => std::fs::write(path, qr::render_svg(&canonical, &options)?)?,
            _ => std::fs::write(path, qr::render_png(&canonical, &options)?)?,
        }
        println!("\x1b[1;32m✓\x1b[0m Wrote {}", path.display());
    }

    if args.terminal {
        println!("{}", render_terminal(&format_content(&content))?);
    }

    Ok(())
}
