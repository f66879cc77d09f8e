/// Unordered list block: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list<'a>(mut lines: impl Iterator<Item = &'a str>) -> bool {
        lines.all(|line| line.starts_with(Self::MARKER))
    }

    pub fn strip_item(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line).trim()
    }
}

/// Ordered list block: lines read `1. `, `2. `, `3. `, ... in sequence.
pub struct OrderedList;

impl OrderedList {
    /// Follows the item number.
    pub const SEPARATOR: &'static str = ". ";

    /// The marker expected on the item at 1-based `position`.
    pub fn marker(position: usize) -> String {
        format!("{position}{}", Self::SEPARATOR)
    }

    pub fn is_list<'a>(lines: impl Iterator<Item = &'a str>) -> bool {
        lines
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Strips the marker for `position` from a line.
    pub fn strip_item(line: &str, position: usize) -> &str {
        line.strip_prefix(&Self::marker(position))
            .unwrap_or(line)
            .trim()
    }
}
