use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// MIME type used when the extension is missing or not in the table
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A file's bytes encoded as base64 together with its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    pub mime: &'static str,
    pub payload: String,
}

impl EncodedAsset {
    pub fn from_bytes(bytes: &[u8], mime: &'static str) -> Self {
        Self {
            mime,
            payload: STANDARD.encode(bytes),
        }
    }
}

/// Renders as `data:<mime>;base64,<payload>`
impl fmt::Display for EncodedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

/// Look up the MIME type for a path by its extension (case-insensitive)
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        // Images
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        // Audio
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogv") => "video/ogg",
        _ => FALLBACK_MIME,
    }
}

/// Resolve a reference from document text against the document's directory.
/// Absolute paths are kept as they are.
pub fn resolve_local_path(base_dir: &Path, src: &str) -> PathBuf {
    let src = src.trim_start_matches("./");
    base_dir.join(src)
}

/// Read a file and encode it as a data URI payload.
///
/// Returns `None` and logs a warning when the file can't be read. Callers
/// treat that as a soft failure and keep the original reference.
pub fn encode_file(path: &Path) -> Option<EncodedAsset> {
    match fs::read(path) {
        Ok(bytes) => {
            let asset = EncodedAsset::from_bytes(&bytes, mime_for_path(path));
            debug!(
                "Encoded {} ({} bytes → {} bytes base64)",
                path.display(),
                bytes.len(),
                asset.payload.len()
            );
            Some(asset)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            None
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}
