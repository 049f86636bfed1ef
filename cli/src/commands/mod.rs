//! CLI command implementations.

mod activity;
mod delete;
mod generate;
mod history;
mod ping;
mod show;
mod stats;
mod upload;

pub use activity::{activity, ActivityArgs};
pub use delete::{delete, DeleteArgs};
pub use generate::{generate, GenerateArgs};
pub use history::{history, HistoryArgs};
pub use ping::{ping, PingArgs};
pub use show::{show, ShowArgs};
pub use stats::stats;
pub use upload::{upload, UploadArgs};
