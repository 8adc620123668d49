//! Receipt source rendering.
//!
//! Turns a receipt file into the single ordered text string the line filter
//! consumes. PDF sources go through lopdf for structural checks and
//! pdf-extract for the text layer; `.txt` sources are read verbatim as
//! already-rendered text.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::PdfError;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Render a receipt source file to text, dispatching on the file extension.
pub fn render(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(PdfError::SourceNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => render_pdf(path),
        "txt" => fs::read_to_string(path).map_err(|e| PdfError::TextExtraction(e.to_string())),
        other => Err(PdfError::UnsupportedFormat(other.to_string())),
    }
}

fn render_pdf(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|e| PdfError::Parse(e.to_string()))?;

    let mut doc = Document::load_mem(&data).map_err(|e| PdfError::Parse(e.to_string()))?;

    // PDFs with empty-password encryption can still be read; pdf_extract
    // needs the decrypted bytes in that case.
    let data = if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {e}")))?;
        decrypted
    } else {
        data
    };

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(PdfError::NoPages);
    }
    debug!("loaded PDF with {} pages", page_count);

    pdf_extract::extract_text_from_mem(&data).map_err(|e| PdfError::TextExtraction(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_source_not_found() {
        let err = render(Path::new("no/such/receipt.pdf")).unwrap_err();
        assert!(matches!(err, PdfError::SourceNotFound(_)));
    }

    #[test]
    fn txt_source_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.txt");
        fs::write(&path, "   EUR\nMilk  2,50\n-----\n").unwrap();

        let text = render(&path).unwrap();
        assert_eq!(text, "   EUR\nMilk  2,50\n-----\n");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.docx");
        fs::write(&path, "whatever").unwrap();

        let err = render(&path).unwrap_err();
        assert!(matches!(err, PdfError::UnsupportedFormat(ext) if ext == "docx"));
    }
}
