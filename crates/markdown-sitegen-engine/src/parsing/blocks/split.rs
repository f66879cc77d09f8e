/// Separates blocks in a document.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks in document order.
///
/// Surrounding whitespace of each block is dropped, so joining the result
/// back together does not reproduce the input.
pub fn split_into_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
