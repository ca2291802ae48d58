//! String helpers for displaying user and model text.

/// Single-line preview of `s`, at most `max_chars` characters.
///
/// Line breaks collapse to spaces; an ellipsis marks a cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = flat.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_cut() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn test_preview_collapses_lines() {
        assert_eq!(preview("line one\n  line two", 40), "line one line two");
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("नमस्ते", 40), "नमस्ते");
        assert_eq!(preview("मराठी भाषा शिकणे", 8), "मराठी...");
    }
}
