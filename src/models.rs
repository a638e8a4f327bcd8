use axum::body::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

/// A file received on the upload endpoint. Exists only for the duration of
/// the request; nothing is ever written to disk or a database.
///
/// Every field is client-supplied and untrusted. The derived accessors are
/// pure functions of those inputs and must not be used for any security
/// decision.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(filename: String, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            filename,
            content_type,
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Substring after the last `.` of the filename, lower-cased.
    /// `"no extension"` when the filename contains no dot. The extension is
    /// whatever the client claims it is (spoofable by design).
    pub fn extension(&self) -> String {
        match self.filename.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => "no extension".to_string(),
        }
    }

    /// Client-declared MIME type, `"unknown"` when absent or empty.
    /// Not verified against the actual content (spoofable by design).
    pub fn content_type_or_unknown(&self) -> String {
        match self.content_type.as_deref() {
            Some(ct) if !ct.is_empty() => ct.to_string(),
            _ => "unknown".to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,

    #[schema(example = "memeforge")]
    pub service: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,

    /// Original filename, echoed unmodified and unsanitized
    #[schema(example = "photo.JPG")]
    pub filename: String,

    /// Client-declared MIME type, "unknown" if absent
    #[schema(example = "image/jpeg")]
    pub content_type: String,

    /// Lower-cased extension from the filename, or "no extension"
    #[schema(example = "jpg")]
    pub extension: String,

    /// Payload length in bytes
    #[schema(example = 3)]
    pub size_bytes: usize,

    #[schema(example = "File received (not validated or saved)")]
    pub message: String,
}
