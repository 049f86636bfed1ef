//! Ping command implementation.

use clap::Args;
use qrdrop_core::{DriveClient, QrService};

use super::upload::credential_from;

#[derive(Args)]
pub struct PingArgs {
    /// OAuth2 access token (falls back to $GOOGLE_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,

    /// List this many recent Drive files after the check
    #[arg(long, default_value_t = 0)]
    list: u32,
}

/// Verify the Drive credential with the cheapest possible API call.
pub async fn ping(service: &QrService, args: PingArgs) -> anyhow::Result<()> {
    let credential = credential_from(args.access_token, None)?;
    let client = DriveClient::new(credential);

    client.ping().await?;
    println!("\x1b[1;32m✓\x1b[0m Drive credential is valid");

    if args.list > 0 {
        let folder = service.config().drive_folder.as_deref();
        for file in client.list(folder, args.list).await? {
            println!(
                "  • {}  {}",
                file.name,
                file.created_time.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
