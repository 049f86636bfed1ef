//! Activity command implementation.

use clap::Args;
use qrdrop_core::{ActivityAction, QrService};

#[derive(Args)]
pub struct ActivityArgs {
    #[arg(long, default_value_t = 20)]
    limit: usize,

    #[arg(long, default_value_t = 0)]
    offset: usize,
}

/// Show recent activity, newest first.
pub fn activity(service: &QrService, args: ActivityArgs) -> anyhow::Result<()> {
    let entries = service.recent_activity(args.limit, args.offset)?;

    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in &entries {
        let marker = match entry.action {
            ActivityAction::Error => "\x1b[1;31m✗\x1b[0m",
            ActivityAction::QrDeleted | ActivityAction::FileDeleted => "\x1b[1;33m⬤\x1b[0m",
            _ => "\x1b[1;32m⬤\x1b[0m",
        };
        println!("{} {}  {}", marker, entry.created_at, entry.description);
    }

    Ok(())
}
