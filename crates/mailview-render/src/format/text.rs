/// Truncate to a maximum number of characters, appending `...` when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Escape pipes so a value cannot break a Markdown table or labeled line.
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Table cells additionally collapse newlines to spaces.
pub fn escape_table(text: &str) -> String {
    escape_pipes(text).replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("héllö wörld", 8), "héllö...");
    }

    #[test]
    fn test_escape_pipes() {
        assert_eq!(escape_pipes("a|b"), "a\\|b");
        assert_eq!(escape_pipes("plain"), "plain");
    }

    #[test]
    fn test_escape_table_collapses_newlines() {
        assert_eq!(escape_table("a|b\nc"), "a\\|b c");
    }
}
