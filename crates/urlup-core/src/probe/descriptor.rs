//! The value objects a probe produces.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Ok,
    NotFound,
}

impl ProbeStatus {
    /// PHP-style upload error code: `0` (`UPLOAD_ERR_OK`) or `4` (`UPLOAD_ERR_NO_FILE`).
    pub fn upload_error_code(self) -> u8 {
        match self {
            ProbeStatus::Ok => 0,
            ProbeStatus::NotFound => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProbeStatus::Ok => "ok",
            ProbeStatus::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote resource described as a would-be uploaded file.
///
/// Name fields come from the URL path only. `mime_type` and `size` come from
/// the response headers when present. Check [`status`](Self::status) before
/// trusting any of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFileDescriptor {
    pub(crate) url: String,
    pub(crate) name: String,
    pub(crate) base_name: String,
    pub(crate) extension: String,
    pub(crate) mime_type: String,
    pub(crate) size: u64,
    pub(crate) status: ProbeStatus,
}

impl RemoteFileDescriptor {
    /// The input URL, unchanged.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Last path segment, e.g. `image.png`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Lower-case, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn status(&self) -> ProbeStatus {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProbeStatus::Ok
    }

    /// Converts an `Ok` descriptor into the uploaded-file shape.
    pub fn into_uploadable(self) -> Option<UploadableFile> {
        if !self.is_ok() {
            return None;
        }
        Some(UploadableFile {
            name: self.name,
            mime_type: self.mime_type,
            size: self.size,
            source_reference: self.url,
        })
    }
}

/// Fields in declaration order, plus `error` (the upload error code of `status`).
impl Serialize for RemoteFileDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RemoteFileDescriptor", 8)?;
        s.serialize_field("url", &self.url)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("base_name", &self.base_name)?;
        s.serialize_field("extension", &self.extension)?;
        s.serialize_field("mime_type", &self.mime_type)?;
        s.serialize_field("size", &self.size)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("error", &self.status.upload_error_code())?;
        s.end()
    }
}

impl fmt::Display for RemoteFileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What a web framework expects from a locally submitted upload.
///
/// `source_reference` stands where a temporary file path would be and points
/// at the remote URL; nothing has been downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadableFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub source_reference: String,
}
