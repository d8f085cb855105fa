use crate::error::ExtractError;
use crate::models::Category;
use lopdf::Document;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::warn;
use zip::ZipArchive;

/// Produces sanitized text for the given bytes and format.
///
/// Never fails: a per-format parse error is logged and degrades to an
/// empty string, so a corrupt or image-only document is still indexed
/// with searchable metadata instead of being skipped forever.
pub fn extract(bytes: &[u8], category: Category) -> String {
    let extracted = match category {
        Category::Pdf => pdf_text(bytes),
        Category::Docx => docx_text(bytes),
        // No structured parser for legacy DOC; best-effort text decode.
        Category::Doc | Category::PlainText | Category::Unsupported => Ok(utf8_text(bytes)),
    };

    let text = match extracted {
        Ok(text) => text,
        Err(error) => {
            warn!(?category, %error, "extraction failed, indexing empty content");
            String::new()
        }
    };

    sanitize(&text)
}

/// Removes every code point outside
/// {U+0009, U+000A, U+000D, U+0020–U+D7FF, U+E000–U+FFFD}, keeping the
/// output safe for the index payload's text encoding. Idempotent.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&c| is_allowed(c)).collect()
}

fn is_allowed(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000D}' | '\u{0020}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}'
    )
}

fn pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let document =
        Document::load_mem(bytes).map_err(|error| ExtractError::PdfParse(error.to_string()))?;

    let mut text = String::new();
    for (page_no, _page_id) in document.get_pages() {
        let page_text = document
            .extract_text(&[page_no])
            .map_err(|error| ExtractError::PdfParse(error.to_string()))?;

        if !page_text.trim().is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&page_text);
        }
    }

    Ok(text)
}

fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|error| ExtractError::DocxParse(error.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|error| ExtractError::DocxParse(error.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|error| ExtractError::DocxParse(error.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(fragment)) => {
                let unescaped = fragment
                    .unescape()
                    .map_err(|error| ExtractError::DocxParse(error.to_string()))?;
                text.push_str(&unescaped);
            }
            // Paragraph boundaries become line breaks in the raw text.
            Ok(Event::End(element)) if element.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Eof) => break,
            Err(error) => return Err(ExtractError::DocxParse(error.to_string())),
            Ok(_) => {}
        }
    }

    Ok(text)
}

fn utf8_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
