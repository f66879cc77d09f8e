use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The kind of a block, decided by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Classifies a block. The first matching kind wins, tested in this order:
///
/// 1. heading - first line opens with 1-6 `#` and a space
/// 2. code - block starts with ```` ```\n ```` and ends with ```` ``` ````
/// 3. quote - every line starts with `>`
/// 4. unordered list - every line starts with `- `
/// 5. ordered list - lines start `1. `, `2. `, ... in sequence
/// 6. paragraph - anything else, including an empty block
pub fn classify(block: &str) -> BlockKind {
    let lines = || block.split('\n');

    if lines().next().and_then(Heading::level).is_some() {
        BlockKind::Heading
    } else if CodeFence::is_fenced(block) {
        BlockKind::Code
    } else if BlockQuote::is_quote(lines()) {
        BlockKind::Quote
    } else if UnorderedList::is_list(lines()) {
        BlockKind::UnorderedList
    } else if OrderedList::is_list(lines()) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
