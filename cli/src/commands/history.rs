//! History command implementation.

use clap::Args;
use qrdrop_core::{QrContentType, QrService, RecordQuery};

#[derive(Args)]
pub struct HistoryArgs {
    /// Filter by content category
    #[arg(short = 't', long = "type")]
    content_type: Option<QrContentType>,

    /// Case-insensitive substring search over content and file names
    #[arg(short, long)]
    search: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long, default_value_t = 20)]
    page_size: usize,
}

/// List generated codes, newest first.
pub fn history(service: &QrService, args: HistoryArgs) -> anyhow::Result<()> {
    let query = RecordQuery {
        content_type: args.content_type,
        search: args.search,
        page: args.page,
        page_size: args.page_size,
    };
    let page = service.history(&query)?;

    if page.items.is_empty() {
        println!("No QR codes found.");
        return Ok(());
    }

    for record in &page.items {
        let file = record
            .file_name
            .as_deref()
            .map(|name| format!(" [{name}]"))
            .unwrap_or_default();
        println!(
            "\x1b[1m{}\x1b[0m  {:<9} {}{}",
            record.id,
            record.content_type,
            preview(&record.content),
            file
        );
    }

    let pages = page.total.div_ceil(page.page_size).max(1);
    println!("\npage {} of {} ({} records)", page.page, pages, page.total);

    Ok(())
}

/// Shorten long content for single-line display.
fn preview(content: &str) -> String {
    const MAX_PREVIEW_LEN: usize = 60;

    if content.chars().count() > MAX_PREVIEW_LEN {
        let cut: String = content.chars().take(MAX_PREVIEW_LEN).collect();
        format!("{cut}...")
    } else {
        content.to_string()
    }
}
