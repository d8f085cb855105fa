use crate::models::Category;

/// Returns the lowercased extension after the last `.`, or an empty
/// string when the name has none.
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Maps a file name to its format category. Pure function; the docx
/// arm sits before doc so the longer extension wins.
pub fn classify(filename: &str) -> Category {
    match file_extension(filename).as_str() {
        "pdf" => Category::Pdf,
        "docx" => Category::Docx,
        "doc" => Category::Doc,
        "txt" => Category::PlainText,
        _ => Category::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, file_extension};
    use crate::models::Category;

    #[test]
    fn docx_takes_precedence_over_doc() {
        assert_eq!(classify("report.docx"), Category::Docx);
        assert_eq!(classify("report.doc"), Category::Doc);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(classify("notes.DOC"), Category::Doc);
        assert_eq!(classify("manual.PDF"), Category::Pdf);
        assert_eq!(classify("readme.Txt"), Category::PlainText);
    }

    #[test]
    fn extensions_outside_the_allow_list_are_unsupported() {
        assert_eq!(classify("archive.tar"), Category::Unsupported);
        assert_eq!(classify("images/photo.png"), Category::Unsupported);
        assert_eq!(classify("report.pdf.bak"), Category::Unsupported);
    }

    #[test]
    fn missing_extension_yields_empty_string_and_unsupported() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(classify("README"), Category::Unsupported);
    }

    #[test]
    fn extension_is_the_substring_after_the_last_dot() {
        assert_eq!(file_extension("docs/v1.2/report.pdf"), "pdf");
        assert_eq!(file_extension("trailing."), "");
    }
}
