/// Placeholder written for any field that could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Flattens a text fragment into a single line that is safe to wrap in
/// double quotes.
///
/// Line breaks and tabs become spaces, double quotes become apostrophes,
/// and adjacent spaces are collapsed pairwise in one pass: each pair of
/// neighbouring spaces loses one member, so a run of three spaces comes out
/// as two. Leading and trailing spaces are trimmed. An empty result is
/// reported as [`NOT_AVAILABLE`].
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            '"' => '\'',
            other => other,
        })
        .peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c == ' ' && chars.peek() == Some(&' ') {
            chars.next();
        }
    }

    let trimmed = out.trim_matches(' ');
    if trimmed.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_is_unchanged() {
        assert_eq!(clean_text("Silicone Mold 3D"), "Silicone Mold 3D");
        assert_eq!(clean_text("  padded  "), "padded");
    }

    #[test]
    fn empty_and_blank_become_placeholder() {
        assert_eq!(clean_text(""), NOT_AVAILABLE);
        assert_eq!(clean_text("   "), NOT_AVAILABLE);
        assert_eq!(clean_text("\n\t\r"), NOT_AVAILABLE);
    }

    #[test]
    fn control_whitespace_becomes_space() {
        assert_eq!(clean_text("a\nb"), "a b");
        assert_eq!(clean_text("a\tb\rc"), "a b c");
        // two spaces after replacement, one pair removed
        assert_eq!(clean_text("a\n\nb"), "a b");
    }

    #[test]
    fn space_runs_collapse_pairwise() {
        assert_eq!(clean_text("a  b"), "a b");
        assert_eq!(clean_text("a   b"), "a  b");
        assert_eq!(clean_text("a    b"), "a  b");
        assert_eq!(clean_text("a     b"), "a   b");
    }

    #[test]
    fn double_quotes_become_apostrophes() {
        assert_eq!(clean_text(r#"He said "hi""#), "He said 'hi'");
        assert!(!clean_text(r#""""#).contains('"'));
    }

    #[test]
    fn non_ascii_survives() {
        assert_eq!(clean_text("Crème  brûlée"), "Crème brûlée");
    }
}
