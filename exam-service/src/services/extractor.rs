use lopdf::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("not a parseable PDF: {0}")]
    InvalidPdf(String),
}

/// Extract the text of a PDF, page by page.
///
/// Pages are visited in document order; pages whose extraction yields no
/// text (blank or image-only) are omitted rather than kept as empty lines.
/// The surviving page texts are joined with a single newline.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc =
        Document::load_mem(bytes).map_err(|e| ExtractionError::InvalidPdf(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_number, _page_id) in doc.get_pages() {
        // A page that cannot be decoded contributes nothing, same as a
        // blank page.
        let text = doc.extract_text(&[page_number]).unwrap_or_default();
        let text = text.trim();
        if !text.is_empty() {
            pages.push(text.to_string());
        }
    }

    Ok(pages.join("\n"))
}

/// Extract the text of a PDF as one flat string.
///
/// Variant used by the summarizer; no per-page handling.
pub fn extract_text_flat(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::InvalidPdf(e.to_string()))?;
    Ok(text.trim().to_string())
}
