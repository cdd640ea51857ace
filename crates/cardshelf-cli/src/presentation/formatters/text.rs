/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(width - 1).collect();
    format!("{}…", kept)
}

/// Collapse embedded newlines so multi-line cells stay on one row.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Charizard", 20), "Charizard");
        assert_eq!(truncate("Charizard", 5), "Char…");
        assert_eq!(truncate("Charizard", 0), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("line one\nline  two"), "line one line two");
    }
}
