use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the word left of `byte_offset`, skipping whitespace first.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let blank = |g: &str| g.chars().all(char::is_whitespace);

    let mut idx = graphemes.len();
    while idx > 0 && blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_route_labels() {
        assert_eq!(display_width("Love Field Shuttle"), 18);
        assert_eq!(display_width("Malcolm X \u{2014} Maple"), 17);
        assert_eq!(display_width("\u{4F60}\u{597D}"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_fits_and_marks() {
        assert_eq!(truncate_to_width("Ross", 10), "Ross");
        assert_eq!(truncate_to_width("Ross", 4), "Ross");
        assert_eq!(truncate_to_width("Cockrell Hill North", 8), "Cockrel\u{2026}");
        assert_eq!(truncate_to_width("Ross", 1), "\u{2026}");
        assert_eq!(truncate_to_width("Ross", 0), "");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        // 8 cells; budget of 4 leaves one wide char plus the ellipsis
        let out = truncate_to_width("\u{4F60}\u{597D}\u{4E16}\u{754C}", 4);
        assert_eq!(out, "\u{4F60}\u{2026}");
        assert!(display_width(&out) <= 4);
    }

    #[test]
    fn grapheme_steps() {
        assert_eq!(next_grapheme_boundary("bus", 0), Some(1));
        assert_eq!(next_grapheme_boundary("bus", 3), None);
        assert_eq!(prev_grapheme_boundary("bus", 3), Some(2));
        assert_eq!(prev_grapheme_boundary("bus", 0), None);

        let s = "cafe\u{0301}!"; // é is e + combining accent, bytes 3..6
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn word_left() {
        let s = "love field";
        assert_eq!(word_boundary_left(s, s.len()), 5);
        assert_eq!(word_boundary_left(s, 5), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_left("a  ", 3), 0);
    }
}
