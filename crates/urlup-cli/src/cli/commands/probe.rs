//! `urlup probe <url>` – print the descriptor of a remote file.

use anyhow::Result;
use std::process::ExitCode;
use urlup_core::config::UrlupConfig;
use urlup_core::RemoteFileDescriptor;

use super::{exit_code, probe_blocking};

fn print_descriptor(d: &RemoteFileDescriptor) {
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };
    println!("{:<10} {}", "URL", d.url());
    println!("{:<10} {}", "STATUS", d.status());
    println!("{:<10} {}", "NAME", or_dash(d.name()));
    println!("{:<10} {}", "BASENAME", or_dash(d.base_name()));
    println!("{:<10} {}", "EXTENSION", or_dash(d.extension()));
    println!("{:<10} {}", "MIME", or_dash(d.mime_type()));
    println!("{:<10} {}", "SIZE", d.size());
}

pub async fn run_probe(cfg: &UrlupConfig, url: &str, json: bool) -> Result<ExitCode> {
    let descriptor = probe_blocking(cfg, url).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        print_descriptor(&descriptor);
    }
    Ok(exit_code(descriptor.is_ok()))
}
