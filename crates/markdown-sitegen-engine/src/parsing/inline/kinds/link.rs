use std::sync::OnceLock;

use regex::Regex;

use super::TargetMatch;

/// Inline link `[text](url)`.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\]]*)\]\(([^)]*)\)";
    /// Marks the bracket as an image rather than a link.
    pub const IMAGE_BANG: u8 = b'!';

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Finds every link in `text`, left to right, skipping image syntax.
    ///
    /// The regex crate has no look-behind, so a match is discarded when the
    /// byte before its opening `[` is `!`.
    pub fn find_all(text: &str) -> Vec<TargetMatch<'_>> {
        let bytes = text.as_bytes();
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let start = whole.start();
                if start > 0 && bytes[start - 1] == Self::IMAGE_BANG {
                    return None;
                }
                Some(TargetMatch {
                    range: whole.range(),
                    text: caps.get(1)?.as_str(),
                    url: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }

    /// Finds every link in `text` as `(text, url)` pairs.
    #[cfg(test)]
    fn extract(text: &str) -> Vec<(&str, &str)> {
        Self::find_all(text)
            .into_iter()
            .map(|m| (m.text, m.url))
            .collect()
    }
}
