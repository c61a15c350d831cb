//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion, for the log panel
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to max length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Acme", 10), "Acme");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("Dooley, Kozey and Cronin", 10), "Dooley,...");
    }

    #[test]
    fn test_truncate_tiny_max_len() {
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
