use super::TextMeasure;
use crate::{PDFError, Pt};
use log::trace;

/// Greedily packs the words of `text` into lines no wider than `max_width` at `font_size`.
///
/// The text is scanned one space at a time: the prefix up to the next space (or the end of the
/// text) is measured, and as long as it fits that space becomes the candidate break. Once a
/// prefix overflows, the line is cut at the previous candidate and scanning restarts on the
/// trimmed remainder. Only spaces are break opportunities; runs of spaces are kept inside a
/// line and dropped at a break.
///
/// A word that is wider than `max_width` on its own is placed on a line by itself, so the
/// returned lines can overflow but the scan always makes progress. Empty text yields no lines.
///
/// Fails if the measurement fails for any candidate prefix.
pub fn wrap_lines<M: TextMeasure + ?Sized>(
    text: &str,
    measure: &M,
    font_size: Pt,
    max_width: Pt,
) -> Result<Vec<String>, PDFError> {
    let mut lines: Vec<String> = Vec::new();
    let mut remaining = text;
    let mut last_space: Option<usize> = None;

    while !remaining.is_empty() {
        let search_from = last_space.map_or(0, |i| i + 1);
        let candidate = remaining[search_from..]
            .find(' ')
            .map(|i| i + search_from)
            .unwrap_or(remaining.len());

        let width = measure.text_width(&remaining[..candidate], font_size)?;

        if width > max_width {
            // nothing fits yet: break after this word anyway so we always move forward
            let break_at = last_space.unwrap_or(candidate);
            trace!("breaking line at byte {break_at} ({width} > {max_width})");
            lines.push(remaining[..break_at].to_string());
            remaining = remaining[break_at..].trim();
            last_space = None;
        } else if candidate == remaining.len() {
            lines.push(remaining.to_string());
            remaining = "";
        } else {
            last_space = Some(candidate);
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::testing::Monospace;
    use pretty_assertions::assert_eq;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
        eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
        quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

    fn one_point_per_char() -> Monospace {
        // 1000 units at 1pt is exactly 1pt per character
        Monospace::new(1000.0)
    }

    #[test]
    fn packs_words_greedily() {
        let lines = wrap_lines("aa bb cc", &one_point_per_char(), Pt(1.0), Pt(5.0)).unwrap();
        assert_eq!(lines, vec!["aa bb", "cc"]);
    }

    #[test]
    fn fitting_text_is_a_single_line() {
        let lines = wrap_lines("Hello world", &one_point_per_char(), Pt(1.0), Pt(11.0)).unwrap();
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let lines = wrap_lines("", &one_point_per_char(), Pt(1.0), Pt(100.0)).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let metric = Monospace::new(600.0);
        let lines = wrap_lines("Supercalifragilistic", &metric, Pt(12.0), Pt(1.0)).unwrap();
        assert_eq!(lines, vec!["Supercalifragilistic"]);

        let lines = wrap_lines("aaa bbb", &metric, Pt(12.0), Pt(1.0)).unwrap();
        assert_eq!(lines, vec!["aaa", "bbb"]);
    }

    #[test]
    fn lines_fit_unless_they_are_a_single_word() {
        let metric = Monospace::new(600.0);
        let size = Pt(12.0);
        for max_width in [40.0, 90.0, 150.0, 300.0] {
            let max_width = Pt(max_width);
            let lines = wrap_lines(LOREM, &metric, size, max_width).unwrap();
            for line in lines.iter().filter(|line| line.contains(' ')) {
                let width = metric.text_width(line, size).unwrap();
                assert!(width <= max_width, "{line:?} is {width} wide, over {max_width}");
            }
        }
    }

    #[test]
    fn lines_reconstruct_the_input() {
        let metric = Monospace::new(500.0);
        for max_width in [10.0, 60.0, 120.0, 1000.0] {
            let lines = wrap_lines(LOREM, &metric, Pt(10.0), Pt(max_width)).unwrap();
            assert_eq!(lines.join(" "), LOREM);
        }
    }

    #[test]
    fn leading_indent_stays_on_the_first_line() {
        let lines = wrap_lines("    aa bb", &one_point_per_char(), Pt(1.0), Pt(7.0)).unwrap();
        assert_eq!(lines, vec!["    aa", "bb"]);
    }

    #[test]
    fn measurement_failures_propagate() {
        let metric = Monospace::without(600.0, &['☃']);
        let err = wrap_lines("let it ☃", &metric, Pt(12.0), Pt(500.0)).unwrap_err();
        assert!(matches!(err, PDFError::MissingGlyph('☃')));
    }
}
