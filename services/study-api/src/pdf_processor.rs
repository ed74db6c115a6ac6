//! PDF text extraction.

use lopdf::Document;
use studymate_utils::StudyMateResult;

/// Extracts text from uploaded learning material, page by page.
pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate per-page text in document order.
    ///
    /// Each page contributing text is followed by exactly one newline;
    /// pages with no extractable text (or that fail per-page
    /// extraction) contribute nothing, not even a blank line. A stream
    /// that is not a loadable PDF is a `PdfExtraction` error with no
    /// partial-text recovery.
    pub fn extract_text(&self, data: &[u8]) -> StudyMateResult<String> {
        let doc = Document::load_mem(data)?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().cloned().collect();
        page_numbers.sort_unstable();

        let mut text = String::new();
        for number in page_numbers {
            let Ok(page_text) = doc.extract_text(&[number]) else {
                continue;
            };
            // The extractor brackets each page's text with newline
            // artifacts; interior line structure is kept as-is.
            let page_text = page_text.trim_matches('\n');
            if !page_text.is_empty() {
                text.push_str(page_text);
                text.push('\n');
            }
        }

        Ok(text)
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}
