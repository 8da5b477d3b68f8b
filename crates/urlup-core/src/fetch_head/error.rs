//! Error type for a single header fetch.

use thiserror::Error;

/// Why a header fetch produced no usable response.
///
/// The probe never hands these to its callers; they end up as
/// [`ProbeStatus::NotFound`](crate::probe::ProbeStatus::NotFound) and a debug log line.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, DNS, connect, timeout, TLS, ...).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// Only http and https are fetched.
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    /// The transfer ended without any HTTP status line.
    #[error("no HTTP status received")]
    NoStatus,
}
