//! Document text extraction.
//!
//! Dispatches on the (case-insensitive) filename suffix and swallows every
//! decode failure into `None`; the caller treats missing text the same as an
//! empty paste. `.doc` passes the upload acceptance filter but has no
//! extraction branch and always yields `None`.

use std::fs;
use std::path::Path;

/// Extensions accepted by the upload filter.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["txt", "pdf", "doc", "docx"];

/// Whether a client-declared filename passes the upload acceptance filter.
pub fn is_allowed_file(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Extracts plain text from a saved upload, dispatching on the declared
/// filename's suffix. Returns `None` for unsupported suffixes and for any
/// decode error.
pub fn extract_text(path: &Path, filename: &str) -> Option<String> {
    match extension_of(filename)?.as_str() {
        "txt" => fs::read_to_string(path).ok(),
        "pdf" => pdf_extract::extract_text(path).ok(),
        "docx" => extract_docx(path),
        _ => None,
    }
}

/// Joins the text runs of each paragraph, one paragraph per line.
fn extract_docx(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    let docx = docx_rs::read_docx(&bytes).ok()?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Some(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_is_allowed_file() {
        assert!(is_allowed_file("notes.txt"));
        assert!(is_allowed_file("slides.pdf"));
        assert!(is_allowed_file("old.doc"));
        assert!(is_allowed_file("report.docx"));
        assert!(is_allowed_file("REPORT.DOCX"));
        assert!(!is_allowed_file("archive.zip"));
        assert!(!is_allowed_file("no_extension"));
    }

    #[test]
    fn test_extract_txt_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "hello.txt", b"Hello");

        assert_eq!(extract_text(&path, "hello.txt").as_deref(), Some("Hello"));
    }

    #[test]
    fn test_extract_txt_uppercase_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "HELLO.TXT", b"Hello");

        assert_eq!(extract_text(&path, "HELLO.TXT").as_deref(), Some("Hello"));
    }

    // `.doc` passes the acceptance filter but has no extraction branch.
    #[test]
    fn test_doc_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "legacy.doc", b"anything");

        assert!(is_allowed_file("legacy.doc"));
        assert_eq!(extract_text(&path, "legacy.doc"), None);
    }

    #[test]
    fn test_corrupt_pdf_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "bad.pdf", b"not a pdf at all");

        assert_eq!(extract_text(&path, "bad.pdf"), None);
    }

    #[test]
    fn test_corrupt_docx_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "bad.docx", b"not a zip archive");

        assert_eq!(extract_text(&path, "bad.docx"), None);
    }

    #[test]
    fn test_non_utf8_txt_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "binary.txt", &[0xff, 0xfe, 0x00]);

        assert_eq!(extract_text(&path, "binary.txt"), None);
    }

    #[test]
    fn test_missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        assert_eq!(extract_text(&path, "absent.txt"), None);
    }
}
