//! Validation and loading of attached files.
//!
//! Type and size are checked before any bytes are read; only plain text is
//! decoded, the other accepted formats are kept as metadata.

use crate::MAX_ATTACHMENT_BYTES;
use crate::error::validation::ValidationError;
use crate::shell::truncate_chars;

use common::ErrorLocation;
use models::{AttachedFile, FileKind, MAX_TEXT_CHARS};

use std::panic::Location;
use std::path::Path;

use log::{debug, info};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A validated attachment plus whether its text was cut to the request limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAttachment {
    pub file: AttachedFile,
    pub truncated: bool,
}

/// Check a selection against the allow-list and the size cap.
///
/// The declared content type wins; the file extension is only consulted when
/// the type is missing or generic.
#[track_caller]
pub fn validate(name: &str, size_bytes: u64, content_type: &str) -> Result<FileKind, ValidationError> {
    let declared = content_type.trim();
    let kind = if declared.is_empty() || declared.eq_ignore_ascii_case(FALLBACK_CONTENT_TYPE) {
        FileKind::from_file_name(name)
    } else {
        FileKind::from_content_type(declared)
    };

    let kind = kind.ok_or_else(|| ValidationError::UnsupportedFileType {
        name: name.to_string(),
        content_type: content_type.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(ValidationError::FileTooLarge {
            name: name.to_string(),
            size_bytes,
            max_bytes: MAX_ATTACHMENT_BYTES,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(kind)
}

/// Build an attachment from bytes already in memory (e.g. a browser upload).
#[track_caller]
pub fn from_bytes(
    name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<LoadedAttachment, ValidationError> {
    let kind = validate(name, bytes.len() as u64, content_type)?;

    let (extracted_text, truncated) = if kind.is_text() {
        let decoded = String::from_utf8_lossy(bytes);
        let (text, truncated) = truncate_chars(&decoded, MAX_TEXT_CHARS);
        (Some(text), truncated)
    } else {
        (None, false)
    };

    Ok(LoadedAttachment {
        file: AttachedFile {
            name: name.to_string(),
            size_bytes: bytes.len() as u64,
            content_type: content_type.to_string(),
            kind,
            extracted_text,
        },
        truncated,
    })
}

/// Load an attachment from disk.
///
/// The content type is inferred from the extension. Non-text files are never
/// read past their metadata.
pub async fn load(path: &Path) -> Result<LoadedAttachment, ValidationError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content_type = FileKind::from_file_name(&name)
        .map(|kind| kind.content_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    // Reject by type before touching the filesystem.
    validate(&name, 0, content_type)?;

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ValidationError::UnreadableFile {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    let kind = validate(&name, metadata.len(), content_type)?;

    if !kind.is_text() {
        info!("Attached {} ({:?}, {} bytes)", name, kind, metadata.len());
        return Ok(LoadedAttachment {
            file: AttachedFile {
                name,
                size_bytes: metadata.len(),
                content_type: content_type.to_string(),
                kind,
                extracted_text: None,
            },
            truncated: false,
        });
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ValidationError::UnreadableFile {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    let loaded = from_bytes(&name, content_type, &bytes)?;
    info!(
        "Attached {} ({} bytes, truncated={})",
        loaded.file.name, loaded.file.size_bytes, loaded.truncated
    );

    Ok(loaded)
}
