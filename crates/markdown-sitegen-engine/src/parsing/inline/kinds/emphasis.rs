/// Bold text, delimited by a double asterisk.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// Italic text, delimited by a single asterisk.
///
/// Must be split after [`Strong`], otherwise every `**` would read as an
/// empty italic run.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
}
