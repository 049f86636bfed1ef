//! Stats command implementation.

use qrdrop_core::QrService;

/// Display a dashboard summary of stored records.
pub fn stats(service: &QrService) -> anyhow::Result<()> {
    let stats = service.stats()?;

    println!("\n\x1b[1mQrdrop Dashboard\x1b[0m");
    println!("═══════════════════════════════════════");
    println!("\x1b[1mQR codes:\x1b[0m {}", stats.total);
    println!("\x1b[1mUploads:\x1b[0m  {}", stats.uploads);

    if !stats.type_breakdown.is_empty() {
        println!("\n\x1b[1mBy type:\x1b[0m");
        for entry in &stats.type_breakdown {
            println!("  {:<10} {}", entry.content_type.to_string(), entry.count);
        }
    }

    if !stats.recent_uploads.is_empty() {
        println!("\n\x1b[1mRecent uploads:\x1b[0m");
        for record in &stats.recent_uploads {
            println!(
                "  • {}  {}",
                record.file_name.as_deref().unwrap_or("(unnamed)"),
                record.file_url.as_deref().unwrap_or("")
            );
        }
    }

    println!();
    Ok(())
}
