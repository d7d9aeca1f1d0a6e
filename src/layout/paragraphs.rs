/// Paragraphs are separated by line breaks unless told otherwise.
pub const DEFAULT_PARAGRAPH_DELIMITER: &str = "\n";

/// Splits `text` into paragraphs on every occurrence of `delimiter`, trimming each piece and
/// dropping the ones that are left empty. Order is preserved, and empty input simply yields
/// no paragraphs. An empty delimiter falls back to [DEFAULT_PARAGRAPH_DELIMITER].
///
/// Trimming also takes care of the `\r` left behind when `\r\n` text is split on `\n`.
pub fn split_paragraphs(text: &str, delimiter: &str) -> Vec<String> {
    let delimiter = if delimiter.is_empty() {
        DEFAULT_PARAGRAPH_DELIMITER
    } else {
        delimiter
    };

    text.split(delimiter)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_paragraph_order() {
        assert_eq!(
            split_paragraphs("a\nb\nc", DEFAULT_PARAGRAPH_DELIMITER),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn drops_blank_pieces_and_trims() {
        let text = "\n  first paragraph \n\n\t\n   \r\nsecond\r\n\n";
        let paragraphs = split_paragraphs(text, DEFAULT_PARAGRAPH_DELIMITER);
        assert_eq!(paragraphs, vec!["first paragraph", "second"]);
        assert!(paragraphs.iter().all(|p| !p.trim().is_empty()));
    }

    #[test]
    fn empty_input_has_no_paragraphs() {
        assert!(split_paragraphs("", DEFAULT_PARAGRAPH_DELIMITER).is_empty());
        assert!(split_paragraphs(" \n \n", DEFAULT_PARAGRAPH_DELIMITER).is_empty());
    }

    #[test]
    fn custom_delimiters() {
        assert_eq!(
            split_paragraphs("one ¶ two¶three ¶", "¶"),
            vec!["one", "two", "three"]
        );
        assert_eq!(split_paragraphs("x\ny", ""), vec!["x", "y"]);
    }
}
