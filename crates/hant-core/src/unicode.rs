//! Character-level Unicode classification for Chinese text.

/// Core CJK Unified Ideographs block (U+4E00..U+9FFF). The heuristic detector
/// only looks at this block when deciding whether text contains Chinese at all.
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Core block plus Extension A and Extension B.
pub fn is_cjk_ideograph(c: char) -> bool {
    is_han(c) || ('\u{3400}'..='\u{4DBF}').contains(&c) || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

/// Length in code points. All detector thresholds are measured in code points,
/// not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` code points of `text`, borrowed.
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
