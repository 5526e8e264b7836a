use crate::FileKind;

/// **VALUE**: The allow-list is the only gate between arbitrary uploads and the shell.
///
/// **BUG THIS CATCHES**: Would catch if image or archive types slip through, or if a
/// charset parameter makes plain text look unsupported.
#[test]
fn given_content_types_when_matched_then_only_allow_list_accepted() {
    assert_eq!(
        FileKind::from_content_type("text/plain; charset=utf-8"),
        Some(FileKind::Text)
    );
    assert_eq!(
        FileKind::from_content_type("application/pdf"),
        Some(FileKind::Pdf)
    );
    assert_eq!(
        FileKind::from_content_type(FileKind::DOCX_CONTENT_TYPE),
        Some(FileKind::Docx)
    );
    assert_eq!(FileKind::from_content_type("image/png"), None);
    assert_eq!(FileKind::from_content_type("application/zip"), None);
}

#[test]
fn given_file_names_when_matched_then_extension_decides() {
    assert_eq!(FileKind::from_file_name("notes.TXT"), Some(FileKind::Text));
    assert_eq!(FileKind::from_file_name("report.pdf"), Some(FileKind::Pdf));
    assert_eq!(FileKind::from_file_name("draft.v2.docx"), Some(FileKind::Docx));
    assert_eq!(FileKind::from_file_name("photo.png"), None);
    assert_eq!(FileKind::from_file_name("README"), None);
}

#[test]
fn given_kinds_when_queried_then_only_text_is_readable() {
    assert!(FileKind::Text.is_text());
    assert!(!FileKind::Pdf.is_text());
    assert_eq!(FileKind::Text.content_type(), "text/plain");
}
