//! Delete command implementation.

use clap::Args;
use qrdrop_core::QrService;
use uuid::Uuid;

use super::upload::credential_from;

#[derive(Args)]
pub struct DeleteArgs {
    /// Record id
    id: Uuid,

    /// Also delete the uploaded Drive file (FILE records only)
    #[arg(long)]
    drive: bool,

    /// OAuth2 access token (falls back to $GOOGLE_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,
}

/// Delete a stored record, optionally together with its Drive file.
pub async fn delete(service: &QrService, args: DeleteArgs) -> anyhow::Result<()> {
    let Some(removed) = service.delete(args.id)? else {
        anyhow::bail!("no QR record with id {}", args.id);
    };
    println!(
        "\x1b[1;32m✓\x1b[0m Deleted {} record {}",
        removed.content_type, removed.id
    );

    if args.drive {
        let Some(file_id) = removed.file_url.as_deref().and_then(drive_file_id) else {
            println!("Record has no Drive file attached.");
            return Ok(());
        };
        let credential = credential_from(args.access_token, None)?;
        service.delete_drive_file(file_id, credential).await?;
        println!("\x1b[1;32m✓\x1b[0m Deleted Drive file {file_id}");
    }

    Ok(())
}

/// File id out of a `https://drive.google.com/file/d/<id>/view...` link.
fn drive_file_id(url: &str) -> Option<&str> {
    let rest = url.split_once("/file/d/")?.1;
    rest.split('/').next().filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_file_id() {
        assert_eq!(
            drive_file_id("https://drive.google.com/file/d/1AbC-dEf/view?usp=sharing"),
            Some("1AbC-dEf")
        );
        assert_eq!(drive_file_id("https://example.com/other"), None);
    }
}
