//! CLI command handlers. Each command is in its own file.

mod completions;
mod mime;
mod probe;
mod uploadable;

pub use completions::{run_completions, run_man};
pub use mime::run_mime;
pub use probe::run_probe;
pub use uploadable::run_uploadable;

use anyhow::{Context, Result};
use std::process::ExitCode;
use urlup_core::config::UrlupConfig;
use urlup_core::{RemoteFileDescriptor, RemoteFileProbe};

/// Runs the blocking probe on tokio's blocking pool.
async fn probe_blocking(cfg: &UrlupConfig, url: &str) -> Result<RemoteFileDescriptor> {
    let probe = RemoteFileProbe::from_config(cfg);
    let url = url.to_string();
    tokio::task::spawn_blocking(move || probe.probe(&url))
        .await
        .context("probe task join")
}

fn exit_code(found: bool) -> ExitCode {
    if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
