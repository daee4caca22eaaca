//! Line helpers shared by the text parsers.

/// Trimmed, non-empty lines of `raw`.
pub fn meaningful_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Strip a single leading list marker (`-`, `•`, or `*`) from a trimmed line.
///
/// `**` opens markdown emphasis, not a bullet, so it is left alone.
pub fn strip_bullet(line: &str) -> Option<&str> {
    if line.starts_with("**") {
        return None;
    }
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .or_else(|| line.strip_prefix('*'))
        .map(str::trim_start)
}

/// Strip a leading `1.` / `2)` ordinal followed by whitespace.
pub fn strip_ordinal(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(['.', ')'])?;
    rest.starts_with(char::is_whitespace)
        .then_some(rest.trim_start())
}

const EMPHASIS: [&str; 4] = ["**", "__", "*", "_"];

/// Remove a leading heading marker and emphasis pairs wrapping the whole
/// fragment. Markers inside the text, or on one side only, are kept.
pub fn unmark(text: &str) -> &str {
    let mut text = strip_heading(text.trim());
    loop {
        let inner = EMPHASIS
            .iter()
            .find_map(|marker| text.strip_prefix(*marker)?.strip_suffix(*marker))
            .map(str::trim);
        match inner {
            Some(inner) if !inner.is_empty() => text = inner,
            _ => return text,
        }
    }
}

/// Strip a `#` run that opens a markdown heading. `#hashtag` is not a heading.
fn strip_heading(text: &str) -> &str {
    let rest = text.trim_start_matches('#');
    if rest.len() < text.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        text
    }
}

/// Remove emphasis markers around a `key` of a `Key: value` line.
///
/// `**Title:** value` splits into `**Title` and `** value`, so a marker left
/// open on the key is closed off the start of the value.
pub fn unmark_field<'a>(key: &'a str, value: &'a str) -> (&'a str, &'a str) {
    let key = key.trim();
    let opened = EMPHASIS[..2]
        .iter()
        .find(|marker| key.starts_with(**marker) && !key.ends_with(**marker));
    let value = value.trim_start();
    let value = opened
        .and_then(|marker| value.strip_prefix(*marker))
        .unwrap_or(value);
    let key = key.trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace());
    (key, unmark(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_are_stripped() {
        assert_eq!(strip_bullet("- item"), Some("item"));
        assert_eq!(strip_bullet("• item"), Some("item"));
        assert_eq!(strip_bullet("* item"), Some("item"));
        assert_eq!(strip_bullet("**STRENGTHS**"), None);
        assert_eq!(strip_bullet("item"), None);
    }

    #[test]
    fn ordinals_need_trailing_whitespace() {
        assert_eq!(strip_ordinal("1. Data Analysis"), Some("Data Analysis"));
        assert_eq!(strip_ordinal("12) Writing"), Some("Writing"));
        assert_eq!(strip_ordinal("1.5x growth"), None);
        assert_eq!(strip_ordinal("Writing"), None);
    }

    #[test]
    fn unmark_trims_emphasis() {
        assert_eq!(unmark("**Title**"), "Title");
        assert_eq!(unmark("__ *Nested* __"), "Nested");
        assert_eq!(unmark("## IDEA 1"), "IDEA 1");
    }

    #[test]
    fn unmark_keeps_inner_and_one_sided_markers() {
        assert_eq!(unmark("C#"), "C#");
        assert_eq!(unmark("**F#**"), "F#");
        assert_eq!(unmark("#hashtag"), "#hashtag");
        assert_eq!(unmark("snake_case_"), "snake_case_");
        assert_eq!(unmark("*args"), "*args");
        assert_eq!(unmark("**"), "**");
    }

    #[test]
    fn field_emphasis_is_closed_across_the_colon() {
        assert_eq!(unmark_field("**Title", "** Learn C#"), ("Title", "Learn C#"));
        assert_eq!(unmark_field("**Title**", " **F# Tools**"), ("Title", "F# Tools"));
        assert_eq!(unmark_field("Skills", " Python, C#"), ("Skills", "Python, C#"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lines: Vec<_> = meaningful_lines("a\n\n   \n  b  ").collect();
        assert_eq!(lines, ["a", "b"]);
    }
}
