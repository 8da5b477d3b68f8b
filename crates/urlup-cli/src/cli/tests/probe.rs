//! Tests for probe and uploadable subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_probe() {
    match parse(&["urlup", "probe", "https://example.com/dir/photo.JPG"]).command {
        CliCommand::Probe { url, json } => {
            assert_eq!(url, "https://example.com/dir/photo.JPG");
            assert!(!json);
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_probe_json() {
    match parse(&["urlup", "probe", "--json", "https://example.com/a.png"]).command {
        CliCommand::Probe { url, json } => {
            assert_eq!(url, "https://example.com/a.png");
            assert!(json);
        }
        _ => panic!("expected Probe with --json"),
    }
}

#[test]
fn cli_parse_uploadable() {
    match parse(&["urlup", "uploadable", "https://example.com/file.zip"]).command {
        CliCommand::Uploadable { url } => assert_eq!(url, "https://example.com/file.zip"),
        _ => panic!("expected Uploadable"),
    }
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = parse(&[
        "urlup",
        "probe",
        "https://example.com/x",
        "--config",
        "/tmp/urlup.toml",
    ]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/urlup.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Probe { .. }));
}

#[test]
fn cli_probe_requires_url() {
    assert!(Cli::try_parse_from(["urlup", "probe"]).is_err());
}
