//! `urlup uploadable <url>` – print the uploaded-file view as JSON.

use anyhow::Result;
use std::process::ExitCode;
use urlup_core::config::UrlupConfig;

use super::{exit_code, probe_blocking};

pub async fn run_uploadable(cfg: &UrlupConfig, url: &str) -> Result<ExitCode> {
    let file = probe_blocking(cfg, url).await?.into_uploadable();
    println!("{}", serde_json::to_string_pretty(&file)?);
    Ok(exit_code(file.is_some()))
}
