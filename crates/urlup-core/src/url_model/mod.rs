//! URL modeling and file name derivation.
//!
//! Everything here is computed from the URL alone; response headers never
//! influence the name, base name or extension.

mod path;

pub use path::PathName;
pub(crate) use path::split_extension;

use url::Url;

/// A successfully parsed URL together with the name fields of its path.
#[derive(Debug, Clone)]
pub struct UrlParts {
    url: Url,
    path_name: PathName,
}

impl UrlParts {
    /// Parses `input`. Returns `None` for empty input, a missing scheme, or
    /// anything else the `url` crate rejects.
    ///
    /// The name fields come from the path exactly as written in `input`; the
    /// parsed [`Url`] is percent-encoded and normalised and is only used for
    /// the request.
    pub fn parse(input: &str) -> Option<Self> {
        let url = Url::parse(input).ok()?;
        let path_name = PathName::from_path(raw_path(input));
        Some(Self { url, path_name })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn path_name(&self) -> &PathName {
        &self.path_name
    }

    pub fn into_path_name(self) -> PathName {
        self.path_name
    }
}

/// Path of `input` as written: after the scheme and authority, before `?` or `#`.
fn raw_path(input: &str) -> &str {
    let input = input.trim_matches(|c: char| c <= ' ');
    let rest = input.split_once(':').map_or(input, |(_, r)| r);
    let rest = match rest.strip_prefix("//") {
        Some(after) => after
            .find(|c| matches!(c, '/' | '?' | '#'))
            .map_or("", |i| &after[i..]),
        None => rest,
    };
    let end = rest.find(|c| matches!(c, '?' | '#')).unwrap_or(rest.len());
    &rest[..end]
}

/// Name fields for `input`, empty when it does not parse.
pub fn path_name_of(input: &str) -> PathName {
    UrlParts::parse(input)
        .map(UrlParts::into_path_name)
        .unwrap_or_default()
}
