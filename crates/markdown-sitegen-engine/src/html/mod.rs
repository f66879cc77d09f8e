//! # HTML Rendering Tree
//!
//! The output of conversion is a small tree of [`HtmlNode`]s that serializes
//! itself with [`HtmlNode::to_html`].
//!
//! - **`attributes`**: insertion-ordered `name="value"` pairs
//! - **`node`**: the two node variants (leaf and parent) and their rendering
//! - **`convert`**: maps each inline [`TextSpan`](crate::parsing::inline::TextSpan) to a leaf
//!
//! Text and attribute values are written verbatim. Nothing is HTML-escaped;
//! existing pages depend on that byte-for-byte output.

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use convert::{span_to_node, spans_to_nodes};
pub use node::{HtmlNode, LeafNode, ParentNode, RenderError};
