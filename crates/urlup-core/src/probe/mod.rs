//! Remote file probing.
//!
//! A probe parses the URL, fetches the response headers once, and folds the
//! result into a [`RemoteFileDescriptor`]. Failures of any kind (bad URL,
//! network error, status other than 200) show up only as
//! [`ProbeStatus::NotFound`]; the name fields are still filled from whatever
//! URL path was parsed.

mod descriptor;

pub use descriptor::{ProbeStatus, RemoteFileDescriptor, UploadableFile};

use crate::config::UrlupConfig;
use crate::fetch_head::{CurlFetcher, HeadResponse, HeaderFetcher};
use crate::mime_table::MimeTable;
use crate::url_model::UrlParts;

/// The only status code accepted as success. 201, 204 and friends are not.
pub const SUCCESS_STATUS: u32 = 200;

/// Probes URLs with a fetcher and an extension to MIME table.
///
/// Holds no mutable state, so one probe can serve any number of threads.
#[derive(Debug, Clone)]
pub struct RemoteFileProbe<F = CurlFetcher> {
    fetcher: F,
    mime_table: MimeTable,
}

impl RemoteFileProbe<CurlFetcher> {
    /// Curl with default options and the builtin MIME table.
    pub fn new() -> Self {
        Self::with_fetcher(CurlFetcher::default(), MimeTable::builtin())
    }

    pub fn from_config(cfg: &UrlupConfig) -> Self {
        Self::with_fetcher(CurlFetcher::new(cfg.fetch_options()), cfg.mime_table())
    }
}

impl Default for RemoteFileProbe<CurlFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: HeaderFetcher> RemoteFileProbe<F> {
    pub fn with_fetcher(fetcher: F, mime_table: MimeTable) -> Self {
        Self {
            fetcher,
            mime_table,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn mime_table(&self) -> &MimeTable {
        &self.mime_table
    }

    /// Describes `url` as a would-be uploaded file. Never fails; see
    /// [`RemoteFileDescriptor::status`].
    pub fn probe(&self, url: &str) -> RemoteFileDescriptor {
        let parts = UrlParts::parse(url);
        let response = parts.as_ref().and_then(|p| self.fetch(url, p));

        let status = match &response {
            Some(r) if r.status_code == SUCCESS_STATUS => ProbeStatus::Ok,
            _ => ProbeStatus::NotFound,
        };

        let path_name = parts.map(UrlParts::into_path_name).unwrap_or_default();
        let (size, content_type) = match response {
            Some(HeadResponse {
                content_length,
                content_type,
                ..
            }) => (content_length.unwrap_or(0), content_type),
            None => (0, None),
        };
        let mime_type = content_type
            .or_else(|| {
                self.mime_table
                    .lookup_for_name(&path_name.name)
                    .map(str::to_string)
            })
            .unwrap_or_default();

        tracing::debug!(url, %status, size, mime_type = %mime_type, "probed");

        RemoteFileDescriptor {
            url: url.to_string(),
            name: path_name.name,
            base_name: path_name.base_name,
            extension: path_name.extension,
            mime_type,
            size,
            status,
        }
    }

    /// The uploaded-file view of `url`, or `None` when the probe is not `Ok`.
    pub fn to_uploadable_file(&self, url: &str) -> Option<UploadableFile> {
        self.probe(url).into_uploadable()
    }

    fn fetch(&self, url: &str, parts: &UrlParts) -> Option<HeadResponse> {
        match self.fetcher.fetch(parts.url().as_str()) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::debug!(url, error = %e, "header fetch failed");
                None
            }
        }
    }
}

/// Probes `url` with a default [`RemoteFileProbe`].
pub fn probe(url: &str) -> RemoteFileDescriptor {
    RemoteFileProbe::new().probe(url)
}

/// [`RemoteFileProbe::to_uploadable_file`] with a default probe.
pub fn to_uploadable_file(url: &str) -> Option<UploadableFile> {
    RemoteFileProbe::new().to_uploadable_file(url)
}
