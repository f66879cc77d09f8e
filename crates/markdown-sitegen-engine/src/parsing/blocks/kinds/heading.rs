/// ATX heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The character repeated to mark the heading level.
    pub const PREFIX: char = '#';
    /// Separates the hash run from the heading text.
    pub const SEPARATOR: char = ' ';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `line` opens with 1-6 `#` and a space.
    pub fn level(line: &str) -> Option<usize> {
        let hashes = line.len() - line.trim_start_matches(Self::PREFIX).len();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        line[hashes..]
            .starts_with(Self::SEPARATOR)
            .then_some(hashes)
    }

    /// Splits a heading block at its first space into `(level, text)`.
    ///
    /// The level is the length of everything before that space.
    pub fn split(block: &str) -> Option<(usize, &str)> {
        let (hashes, text) = block.split_once(Self::SEPARATOR)?;
        Some((hashes.len(), text))
    }
}
