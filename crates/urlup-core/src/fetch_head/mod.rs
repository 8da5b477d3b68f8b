//! HTTP header probing.
//!
//! Uses the curl crate (libcurl) to fetch only the status and headers of a
//! URL. The body is never consumed: `Head` asks for no body at all, `Get`
//! aborts the transfer on the first body byte.

mod error;
mod parse;

pub use error::FetchError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str;
use std::time::Duration;

/// Request method used for the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMethod {
    #[default]
    Head,
    /// For servers that reject HEAD; headers are read, the body is not.
    Get,
}

/// Knobs for a single header fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub method: ProbeMethod,
    pub connect_timeout: Duration,
    /// Upper bound for the whole request.
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub max_redirects: u32,
    pub user_agent: String,
    /// Extra request headers ("Name" -> "value").
    pub headers: BTreeMap<String, String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: ProbeMethod::Head,
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            follow_redirects: true,
            max_redirects: 10,
            user_agent: default_user_agent(),
            headers: BTreeMap::new(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("urlup/{}", env!("CARGO_PKG_VERSION"))
}

/// Status and the headers the probe cares about, from the final response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadResponse {
    pub status_code: u32,
    /// `Content-Length`, if present and numeric.
    pub content_length: Option<u64>,
    /// `Content-Type` exactly as sent (parameters included), if non-empty.
    pub content_type: Option<String>,
}

/// Performs the one outbound request of a probe.
pub trait HeaderFetcher {
    fn fetch(&self, url: &str) -> Result<HeadResponse, FetchError>;
}

impl<T: HeaderFetcher + ?Sized> HeaderFetcher for &T {
    fn fetch(&self, url: &str) -> Result<HeadResponse, FetchError> {
        (**self).fetch(url)
    }
}

/// libcurl-backed fetcher. Blocking; one easy handle per call.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl HeaderFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<HeadResponse, FetchError> {
        let scheme = url.split_once(':').map_or("", |(s, _)| s);
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(FetchError::UnsupportedScheme(scheme.to_string()));
        }

        let opts = &self.options;
        let mut headers: Vec<String> = Vec::new();
        let mut body_started = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        match opts.method {
            ProbeMethod::Head => easy.nobody(true)?,
            ProbeMethod::Get => easy.get(true)?,
        }
        easy.follow_location(opts.follow_redirects)?;
        easy.max_redirections(opts.max_redirects)?;
        easy.connect_timeout(opts.connect_timeout)?;
        easy.timeout(opts.timeout)?;
        easy.useragent(&opts.user_agent)?;

        if !opts.headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (k, v) in &opts.headers {
                list.append(&format!("{}: {}", k.trim(), v.trim()))?;
            }
            easy.http_headers(list)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            // Returning less than the chunk length makes curl abort the transfer.
            transfer.write_function(|_data| {
                body_started = true;
                Ok(0)
            })?;
            transfer.perform()
        };

        if let Err(e) = performed {
            if !(body_started && e.is_write_error()) {
                return Err(e.into());
            }
        }

        let code = easy.response_code()?;
        if code == 0 {
            return Err(FetchError::NoStatus);
        }

        Ok(parse::parse_headers(code, &headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let o = FetchOptions::default();
        assert_eq!(o.method, ProbeMethod::Head);
        assert_eq!(o.connect_timeout, Duration::from_secs(15));
        assert_eq!(o.timeout, Duration::from_secs(30));
        assert!(o.follow_redirects);
        assert!(o.user_agent.starts_with("urlup/"));
    }

    #[test]
    fn non_http_schemes_are_not_fetched() {
        let f = CurlFetcher::default();
        assert!(matches!(
            f.fetch("file:///etc/hostname"),
            Err(FetchError::UnsupportedScheme(s)) if s == "file"
        ));
        assert!(matches!(
            f.fetch("ftp://example.com/a.zip"),
            Err(FetchError::UnsupportedScheme(_))
        ));
    }
}
