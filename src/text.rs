//! Terminal text measurement.
//!
//! Widths are ANSI-aware so label and axis text placed by the surfaces lines up
//! with the cell grid even when callers pass pre-styled strings.

use crate::geometry::Size;

/// Display width of a single line after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Text with ANSI escapes removed.
pub fn plain(text: &str) -> String {
    let clean = strip_ansi_escapes::strip(text);
    String::from_utf8_lossy(&clean).into_owned()
}

/// Bounding size of a possibly multi-line string, in cells.
pub fn measure(text: &str) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let mut width = 0usize;
    let mut lines = 0usize;
    for line in text.split('\n') {
        width = width.max(display_width(line));
        lines += 1;
    }
    Size::new(width as f64, lines as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(display_width("\u{1b}[1mAB\u{1b}[0m"), 2);
    }

    #[test]
    fn measure_multiline() {
        assert_eq!(measure("abc\nde"), Size::new(3.0, 2.0));
        assert_eq!(measure(""), Size::ZERO);
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        assert_eq!(display_width("図"), 2);
    }
}
