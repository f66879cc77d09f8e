/// Fenced code block type with owned fence constants.
///
/// Only backtick fences are recognised and the fence line carries no info
/// string: a block must start with exactly ```` ```\n ````.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    pub const OPEN: &'static str = "```\n";

    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::OPEN) && block.ends_with(Self::FENCE)
    }

    /// Removes every fence marker from the block and left-trims the rest.
    ///
    /// Markers are removed wherever they occur, including inside the body.
    pub fn strip(block: &str) -> String {
        block.replace(Self::FENCE, "").trim_start().to_string()
    }
}
