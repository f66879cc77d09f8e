/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": they are split out before any other
/// delimiter, so emphasis markers inside backticks survive untouched.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
