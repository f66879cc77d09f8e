use super::attributes::Attributes;

/// Structural problems found while rendering a node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid HTML: parent node has no tag")]
    MissingTag,
    #[error("Invalid HTML: parent node <{tag}> has no children")]
    NoChildren { tag: String },
    #[error("Invalid HTML: leaf node <{tag}> has no value")]
    MissingValue { tag: String },
}

/// A node in the output tree: either a leaf or a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// A node without children.
///
/// Without a tag the value is emitted as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Option<Attributes>,
}

/// A node with an ordered list of children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Option<Attributes>,
}

impl HtmlNode {
    /// Serializes the node and its subtree.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Appends the serialized node to `out`.
    ///
    /// On error `out` may hold a partial rendering and should be discarded.
    pub fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl LeafNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    /// An untagged leaf that renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name, value);
        self
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(tag) = self.tag.as_deref() else {
            out.push_str(self.value.as_deref().unwrap_or_default());
            return Ok(());
        };
        let Some(value) = self.value.as_deref() else {
            return Err(RenderError::MissingValue {
                tag: tag.to_string(),
            });
        };

        open_tag(out, tag, self.attributes.as_ref());
        out.push_str(value);
        close_tag(out, tag);
        Ok(())
    }
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name, value);
        self
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(tag) = self.tag.as_deref() else {
            return Err(RenderError::MissingTag);
        };
        if self.children.is_empty() {
            return Err(RenderError::NoChildren {
                tag: tag.to_string(),
            });
        }

        open_tag(out, tag, self.attributes.as_ref());
        for child in &self.children {
            child.render_into(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: Option<&Attributes>) {
    out.push('<');
    out.push_str(tag);
    if let Some(attrs) = attributes {
        attrs.write_html(out);
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(tag: &str, value: &str) -> HtmlNode {
        LeafNode::new(tag, value).into()
    }

    #[test]
    fn leaf_with_tag_and_value() {
        assert_eq!(leaf("p", "Hello, world!").to_html().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn leaf_with_attributes() {
        let node: HtmlNode = LeafNode::new("a", "Click here")
            .with_attribute("href", "http://example.com")
            .into();
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="http://example.com">Click here</a>"#
        );
    }

    #[test]
    fn leaf_without_tag_is_raw_text() {
        let node: HtmlNode = LeafNode::text("Just <text>").into();
        assert_eq!(node.to_html().unwrap(), "Just <text>");
    }

    #[test]
    fn leaf_with_empty_value_renders_empty_body() {
        assert_eq!(leaf("p", "").to_html().unwrap(), "<p></p>");
    }

    #[test]
    fn leaf_with_tag_but_no_value_is_an_error() {
        let node: HtmlNode = LeafNode {
            tag: Some("div".to_string()),
            ..LeafNode::default()
        }
        .into();
        assert_eq!(
            node.to_html(),
            Err(RenderError::MissingValue {
                tag: "div".to_string()
            })
        );
    }

    #[test]
    fn parent_with_multiple_children() {
        let children = vec![leaf("span", "first"), leaf("p", "second"), leaf("b", "third")];
        let node: HtmlNode = ParentNode::new("div", children).into();
        assert_eq!(
            node.to_html().unwrap(),
            "<div><span>first</span><p>second</p><b>third</b></div>"
        );
    }

    #[test]
    fn deeply_nested_parents() {
        let p = ParentNode::new("p", vec![leaf("span", "deep")]);
        let article = ParentNode::new("article", vec![p.into()]);
        let section = ParentNode::new("section", vec![article.into()]);
        let node: HtmlNode = ParentNode::new("div", vec![section.into()]).into();
        assert_eq!(
            node.to_html().unwrap(),
            "<div><section><article><p><span>deep</span></p></article></section></div>"
        );
    }

    #[test]
    fn nested_parents_with_attributes() {
        let inner =
            ParentNode::new("div", vec![leaf("span", "text")]).with_attribute("class", "inner");
        let outer: HtmlNode = ParentNode::new("section", vec![inner.into()])
            .with_attribute("id", "outer")
            .into();
        assert_eq!(
            outer.to_html().unwrap(),
            r#"<section id="outer"><div class="inner"><span>text</span></div></section>"#
        );
    }

    #[test]
    fn parent_without_tag_is_an_error() {
        let node: HtmlNode = ParentNode {
            tag: None,
            children: vec![leaf("span", "text")],
            attributes: None,
        }
        .into();
        let err = node.to_html().unwrap_err();
        assert_eq!(err, RenderError::MissingTag);
        assert!(err.to_string().contains("tag"));
    }

    #[test]
    fn parent_without_children_is_an_error() {
        let node: HtmlNode = ParentNode::new("div", vec![]).into();
        let err = node.to_html().unwrap_err();
        assert!(err.to_string().contains("children"));
    }

    #[test]
    fn errors_in_children_propagate() {
        let empty_item = ParentNode::new("li", vec![]);
        let node: HtmlNode = ParentNode::new("ul", vec![empty_item.into()]).into();
        assert_eq!(
            node.to_html(),
            Err(RenderError::NoChildren {
                tag: "li".to_string()
            })
        );
    }

    #[test]
    fn accessors() {
        let node: HtmlNode = ParentNode::new("ol", vec![leaf("li", "a")]).into();
        assert_eq!(node.tag(), Some("ol"));
        assert_eq!(node.children().len(), 1);
        assert!(node.children()[0].children().is_empty());
    }
}
