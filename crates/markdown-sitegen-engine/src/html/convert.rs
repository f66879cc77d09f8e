use crate::parsing::inline::{SpanKind, TextSpan};

use super::node::{HtmlNode, LeafNode};

/// Maps an inline span to its leaf node.
///
/// | kind   | output                              |
/// |--------|-------------------------------------|
/// | Plain  | raw text                            |
/// | Bold   | `<b>`                               |
/// | Italic | `<i>`                               |
/// | Code   | `<code>`                            |
/// | Link   | `<a href="target">`                 |
/// | Image  | `<img src="target" alt="content">`, empty body |
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    let content = span.content.as_str();
    let target = span.target.as_deref().unwrap_or_default();
    let leaf = match span.kind {
        SpanKind::Plain => LeafNode::text(content),
        SpanKind::Bold => LeafNode::new("b", content),
        SpanKind::Italic => LeafNode::new("i", content),
        SpanKind::Code => LeafNode::new("code", content),
        SpanKind::Link => LeafNode::new("a", content).with_attribute("href", target),
        SpanKind::Image => LeafNode::new("img", "")
            .with_attribute("src", target)
            .with_attribute("alt", content),
    };
    leaf.into()
}

pub fn spans_to_nodes(spans: &[TextSpan]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_node).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TextSpan::plain("This is a text node"), "This is a text node")]
    #[case(TextSpan::new("bold", SpanKind::Bold), "<b>bold</b>")]
    #[case(TextSpan::new("italic", SpanKind::Italic), "<i>italic</i>")]
    #[case(TextSpan::new("x = 1", SpanKind::Code), "<code>x = 1</code>")]
    #[case(TextSpan::link("Boot", "https://boot.dev"), r#"<a href="https://boot.dev">Boot</a>"#)]
    #[case(TextSpan::image("A cat", "cat.png"), r#"<img src="cat.png" alt="A cat"></img>"#)]
    fn spans_render_per_kind(#[case] span: TextSpan, #[case] expected: &str) {
        assert_eq!(span_to_node(&span).to_html().unwrap(), expected);
    }

    #[test]
    fn empty_plain_span_renders_nothing() {
        assert_eq!(span_to_node(&TextSpan::plain("")).to_html().unwrap(), "");
    }

    #[test]
    fn spans_map_one_to_one() {
        let spans = vec![TextSpan::plain("a"), TextSpan::new("b", SpanKind::Bold)];
        assert_eq!(spans_to_nodes(&spans).len(), 2);
    }
}
