//! `urlup mime <name>` – look a file name up in the MIME table.

use anyhow::Result;
use std::process::ExitCode;
use urlup_core::config::UrlupConfig;

use super::exit_code;

pub fn run_mime(cfg: &UrlupConfig, name: &str) -> Result<ExitCode> {
    let table = cfg.mime_table();
    // A bare extension ("png") is accepted as well as a file name.
    let mime = table
        .lookup_for_name(name)
        .or_else(|| table.lookup(name));
    match mime {
        Some(m) => println!("{m}"),
        None => println!("unknown"),
    }
    Ok(exit_code(mime.is_some()))
}
