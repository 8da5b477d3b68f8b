//! File name components from a URL path.

/// Name, base name and extension of the last segment of a URL path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathName {
    pub name: String,
    pub base_name: String,
    pub extension: String,
}

impl PathName {
    /// Splits the last non-empty segment of `path`.
    ///
    /// The segment is kept raw (percent-encoding is not undone). The extension
    /// is whatever follows the last `.`, lower-cased; the base name is what
    /// precedes it. A root or empty path yields empty fields.
    pub fn from_path(path: &str) -> Self {
        let Some(name) = last_segment(path) else {
            return Self::default();
        };
        let (base_name, extension) = split_extension(name);
        Self {
            name: name.to_string(),
            base_name: base_name.to_string(),
            extension: extension.to_lowercase(),
        }
    }
}

/// Last non-empty `/`-separated segment; trailing slashes are ignored.
pub(crate) fn last_segment(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).last()
}

/// Splits `name` at its last dot into (base name, extension as written).
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) => (&name[..i], &name[i + 1..]),
        None => (name, ""),
    }
}
