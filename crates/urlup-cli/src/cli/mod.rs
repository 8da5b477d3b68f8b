//! CLI for urlup.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use urlup_core::config::{self, UrlupConfig};

use commands::{run_completions, run_man, run_mime, run_probe, run_uploadable};

/// Top-level CLI for urlup.
#[derive(Debug, Parser)]
#[command(name = "urlup")]
#[command(about = "urlup: describe a remote URL as a would-be uploaded file", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlup/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the headers of a URL and print its file descriptor.
    Probe {
        /// HTTP/HTTPS URL to probe.
        url: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the uploaded-file view of a URL as JSON (`null` if not found).
    Uploadable {
        /// HTTP/HTTPS URL to probe.
        url: String,
    },

    /// Show the MIME type the configured table gives a file name.
    Mime {
        /// File name or extension, e.g. `photo.jpg`.
        name: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page on stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let config_path = cli.config;

        match cli.command {
            CliCommand::Probe { url, json } => {
                let cfg = load_config(config_path.as_deref())?;
                run_probe(&cfg, &url, json).await
            }
            CliCommand::Uploadable { url } => {
                let cfg = load_config(config_path.as_deref())?;
                run_uploadable(&cfg, &url).await
            }
            CliCommand::Mime { name } => run_mime(&load_config(config_path.as_deref())?, &name),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<UrlupConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
