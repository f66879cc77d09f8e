pub mod blocks;
pub mod inline;
pub mod title;

use crate::html::{HtmlNode, LeafNode, ParentNode, RenderError};

use blocks::{assemble, classify, split_into_blocks};
use inline::InlineError;

/// Failure to convert a markdown document to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a markdown document into its HTML tree.
///
/// The root is always a `div`. A blank document yields an empty `div` leaf,
/// otherwise one child per block in document order.
pub fn markdown_to_tree(markdown: &str) -> Result<HtmlNode, ConvertError> {
    if markdown.trim().is_empty() {
        return Ok(LeafNode::new("div", "").into());
    }

    let blocks = split_into_blocks(markdown);
    let mut children = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.into_iter().enumerate() {
        let kind = classify(block);
        log::trace!("block {index} classified as {kind:?}");
        children.push(assemble(block, kind)?);
    }

    Ok(ParentNode::new("div", children).into())
}

/// Converts a markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_tree(markdown)?.to_html()?)
}
