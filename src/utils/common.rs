//! Common text helpers

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "1 day", "3 days"
pub fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Split table text into entries: trimmed, no blanks, no `#` comments
pub fn parse_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("harbor"), "Harbor");
        assert_eq!(capitalize_first("Harbor"), "Harbor");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ßtraße"), "SStraße");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "minute"), "1 minute");
        assert_eq!(pluralize(0, "second"), "0 seconds");
        assert_eq!(pluralize(12, "hour"), "12 hours");
    }

    #[test]
    fn test_parse_lines() {
        let text = "# header\n  alpha \n\n\tbeta\n#gamma\ndelta # kept\n";
        assert_eq!(parse_lines(text.lines()), vec!["alpha", "beta", "delta # kept"]);
        assert!(parse_lines("".lines()).is_empty());
    }
}
