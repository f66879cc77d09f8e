use crate::{
    html::{HtmlNode, LeafNode, ParentNode, spans_to_nodes},
    parsing::inline::{InlineError, tokenize},
};

use super::{
    classify::BlockKind,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
};

/// Builds the node for a block of the given kind.
///
/// Code blocks are never inline-parsed; every other kind runs its text
/// through the tokenizer.
pub fn assemble(block: &str, kind: BlockKind) -> Result<HtmlNode, InlineError> {
    let node = match kind {
        BlockKind::Heading => match Heading::split(block) {
            Some((level, text)) => ParentNode::new(format!("h{level}"), text_to_children(text)?),
            None => paragraph(block)?,
        },
        BlockKind::Paragraph => paragraph(block)?,
        BlockKind::Code => {
            let code = LeafNode::new("code", CodeFence::strip(block));
            ParentNode::new("pre", vec![code.into()])
        }
        BlockKind::Quote => {
            let text = block
                .split('\n')
                .map(BlockQuote::strip_line)
                .collect::<Vec<_>>()
                .join(" ");
            ParentNode::new("blockquote", text_to_children(&text)?)
        }
        BlockKind::UnorderedList => {
            let items = block
                .split('\n')
                .map(|line| list_item(UnorderedList::strip_item(line)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ul", items)
        }
        BlockKind::OrderedList => {
            let items = block
                .split('\n')
                .enumerate()
                .map(|(i, line)| list_item(OrderedList::strip_item(line, i + 1)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ol", items)
        }
    };
    Ok(node.into())
}

/// Tokenizes `text` and maps each span to a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(spans_to_nodes(&tokenize(text)?))
}

fn paragraph(block: &str) -> Result<ParentNode, InlineError> {
    let text = block.replace('\n', " ");
    Ok(ParentNode::new("p", text_to_children(&text)?))
}

fn list_item(text: &str) -> Result<HtmlNode, InlineError> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}
