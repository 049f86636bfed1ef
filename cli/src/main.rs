//! Qrdrop CLI - typed QR codes and Drive uploads.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrdrop")]
#[command(about = "Typed QR code generation and Google Drive uploads", long_about = None)]
struct Cli {
    /// Data directory for records and the activity log
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Drive folder id receiving uploads
    #[arg(long)]
    drive_folder: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a QR code from typed content
    Generate(commands::GenerateArgs),
    /// Upload a file to Google Drive and QR-encode its shareable link
    Upload(commands::UploadArgs),
    /// Browse generated codes
    History(commands::HistoryArgs),
    /// Print one generated code
    Show(commands::ShowArgs),
    /// Show recent activity
    Activity(commands::ActivityArgs),
    /// Delete a generated code
    Delete(commands::DeleteArgs),
    /// Show a dashboard summary
    Stats,
    /// Check that the Drive credential works
    Ping(commands::PingArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("qrdrop=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = qrdrop_core::Config::default();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(folder) = cli.drive_folder {
        config.drive_folder = Some(folder);
    }
    let service = qrdrop_core::QrService::new(config)?;

    match cli.command {
        Commands::Generate(args) => commands::generate(&service, args)?,
        Commands::Upload(args) => commands::upload(&service, args).await?,
        Commands::History(args) => commands::history(&service, args)?,
        Commands::Show(args) => commands::show(&service, args)?,
        Commands::Activity(args) => commands::activity(&service, args)?,
        Commands::Delete(args) => commands::delete(&service, args).await?,
        Commands::Stats => commands::stats(&service)?,
        Commands::Ping(args) => commands::ping(&service, args).await?,
    }

    Ok(())
}
