//! Describe a remote URL as a would-be uploaded file without downloading it.
//!
//! ```no_run
//! let descriptor = urlup_core::probe("https://example.com/images/logo.png");
//! if descriptor.is_ok() {
//!     println!("{} ({}, {} bytes)", descriptor, descriptor.mime_type(), descriptor.size());
//! }
//! ```

pub mod config;
pub mod fetch_head;
pub mod logging;
pub mod mime_table;
pub mod probe;
pub mod url_model;

pub use mime_table::MimeTable;
pub use probe::{
    probe, to_uploadable_file, ProbeStatus, RemoteFileDescriptor, RemoteFileProbe, UploadableFile,
};
