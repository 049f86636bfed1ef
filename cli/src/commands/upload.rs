//! Upload command implementation.

use std::path::PathBuf;

use clap::Args;
use qrdrop_core::{DriveCredential, QrOptions, QrService};

use crate::ui::render_terminal;

#[derive(Args)]
pub struct UploadArgs {
    /// File to upload
    path: PathBuf,

    /// OAuth2 access token (falls back to $GOOGLE_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,

    /// OAuth2 refresh token (falls back to $GOOGLE_REFRESH_TOKEN)
    #[arg(long)]
    refresh_token: Option<String>,

    /// Print the code to the terminal
    #[arg(long)]
    terminal: bool,
}

/// Upload a file to Drive and QR-encode its shareable link.
pub async fn upload(service: &QrService, args: UploadArgs) -> anyhow::Result<()> {
    let credential = credential_from(args.access_token, args.refresh_token)?;

    let data = std::fs::read(&args.path)?;
    let file_name = args
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();
    let mime_type = mime_guess::from_path(&args.path)
        .first_or_octet_stream()
        .to_string();

    println!("Uploading {} ({} bytes, {})...", file_name, data.len(), mime_type);

    let (uploaded, record) = service
        .upload_and_generate(data, &file_name, &mime_type, credential, &QrOptions::default())
        .await?;

    println!("\x1b[1;32m✓\x1b[0m Uploaded as \x1b[1m{}\x1b[0m", uploaded.file_name);
    println!("\x1b[1mLink:\x1b[0m      {}", uploaded.shareable_link);
    println!("\x1b[1mQR record:\x1b[0m {}", record.id);

    if args.terminal {
        println!("{}", render_terminal(&uploaded.shareable_link)?);
    }

    Ok(())
}

pub(super) fn credential_from(
    access_token: Option<String>,
    refresh_token: Option<String>,
) -> anyhow::Result<DriveCredential> {
    let Some(access_token) =
        access_token.or_else(|| std::env::var("GOOGLE_ACCESS_TOKEN").ok())
    else {
        anyhow::bail!("provide --access-token or set GOOGLE_ACCESS_TOKEN");
    };
    let refresh_token = refresh_token.or_else(|| std::env::var("GOOGLE_REFRESH_TOKEN").ok());
    Ok(DriveCredential {
        access_token,
        refresh_token,
    })
}
