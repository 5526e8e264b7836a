//! Files attached through the paperclip button.

use serde::{Deserialize, Serialize};

/// Accepted attachment formats. Only [`FileKind::Text`] is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Pdf,
    Docx,
}

impl FileKind {
    pub const TEXT_CONTENT_TYPE: &'static str = "text/plain";
    pub const PDF_CONTENT_TYPE: &'static str = "application/pdf";
    pub const DOCX_CONTENT_TYPE: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    /// Match a declared content type against the allow-list.
    ///
    /// Parameters such as `; charset=utf-8` are ignored.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            Self::TEXT_CONTENT_TYPE => Some(FileKind::Text),
            Self::PDF_CONTENT_TYPE => Some(FileKind::Pdf),
            Self::DOCX_CONTENT_TYPE => Some(FileKind::Docx),
            _ => None,
        }
    }

    /// Match a file name's extension against the allow-list.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(FileKind::Text),
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            FileKind::Text => Self::TEXT_CONTENT_TYPE,
            FileKind::Pdf => Self::PDF_CONTENT_TYPE,
            FileKind::Docx => Self::DOCX_CONTENT_TYPE,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FileKind::Text)
    }
}

/// A validated attachment held by the shell until removed or submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedFile {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
    pub kind: FileKind,
    /// Decoded contents, present only for text files.
    pub extracted_text: Option<String>,
}
