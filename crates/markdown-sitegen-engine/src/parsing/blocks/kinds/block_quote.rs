/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every line carries the quote prefix.
    pub fn is_quote<'a>(mut lines: impl Iterator<Item = &'a str>) -> bool {
        lines.all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one leading `>` and surrounding whitespace from a line.
    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_must_be_quoted() {
        assert!(BlockQuote::is_quote("> a\n>b".lines()));
        assert!(!BlockQuote::is_quote("> a\nb".lines()));
    }

    #[test]
    fn strip_single_level() {
        assert_eq!(BlockQuote::strip_line("> hello"), "hello");
        assert_eq!(BlockQuote::strip_line(">hello  "), "hello");
        assert_eq!(BlockQuote::strip_line(">> nested"), "> nested");
    }
}
