//! Show command implementation.

use std::path::PathBuf;

use clap::Args;
use qrdrop_core::QrService;
use uuid::Uuid;

#[derive(Args)]
pub struct ShowArgs {
    /// Record id
    id: Uuid,

    /// Write the stored data URL to a file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Print one stored record.
pub fn show(service: &QrService, args: ShowArgs) -> anyhow::Result<()> {
    let Some(record) = service.get(args.id)? else {
        anyhow::bail!("no QR record with id {}", args.id);
    };

    println!("\x1b[1mID:\x1b[0m      {}", record.id);
    println!("\x1b[1mType:\x1b[0m    {}", record.content_type);
    println!("\x1b[1mContent:\x1b[0m {}", record.content);
    println!("\x1b[1mCreated:\x1b[0m {}", record.created_at);
    if let Some(file_name) = &record.file_name {
        println!("\x1b[1mFile:\x1b[0m    {}", file_name);
    }
    if let Some(file_url) = &record.file_url {
        println!("\x1b[1mLink:\x1b[0m    {}", file_url);
    }

    if let Some(path) = &args.output {
        std::fs::write(path, &record.qr_image)?;
        println!("\x1b[1;32m✓\x1b[0m Wrote {}", path.display());
    }

    Ok(())
}
