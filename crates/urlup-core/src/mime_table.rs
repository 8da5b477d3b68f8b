//! Extension to MIME type lookup.
//!
//! The table is an ordinary value: probes own one, callers can start from
//! [`MimeTable::builtin`] or [`MimeTable::empty`] and add their own entries.
//! Explicit entries always win; a builtin table answers everything else from
//! the `mime_guess` database.

use std::collections::HashMap;

use crate::url_model::split_extension;

/// Case-insensitive map from file extension to MIME type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimeTable {
    entries: HashMap<String, String>,
    guess: bool,
}

impl MimeTable {
    /// A table with no entries and no fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    /// No explicit entries; every lookup falls back to `mime_guess`.
    pub fn builtin() -> Self {
        Self {
            entries: HashMap::new(),
            guess: true,
        }
    }

    /// Builtin lookup with `overrides` layered on top.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::builtin();
        table.extend(overrides);
        table
    }

    /// Adds or replaces an entry. `ext` may carry a leading dot and any case.
    pub fn insert(&mut self, ext: impl AsRef<str>, mime: impl Into<String>) {
        self.entries.insert(normalize(ext.as_ref()), mime.into());
    }

    pub fn extend<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (ext, mime) in entries {
            self.insert(ext, mime);
        }
    }

    pub fn lookup(&self, ext: &str) -> Option<&str> {
        let ext = normalize(ext);
        if ext.is_empty() {
            return None;
        }
        if let Some(mime) = self.entries.get(&ext) {
            return Some(mime.as_str());
        }
        if self.guess {
            return mime_guess::from_ext(&ext).first_raw();
        }
        None
    }

    /// MIME type for the extension of a file name (text after its last dot).
    pub fn lookup_for_name(&self, name: &str) -> Option<&str> {
        match split_extension(name) {
            (_, "") => None,
            (_, ext) => self.lookup(ext),
        }
    }

    /// True when lookups fall back to the `mime_guess` database.
    pub fn has_fallback(&self) -> bool {
        self.guess
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
