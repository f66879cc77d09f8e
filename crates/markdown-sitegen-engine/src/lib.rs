//! Markdown to HTML conversion for markdown-sitegen.
//!
//! The core is [`markdown_to_html`] and [`extract_title`]; both are pure
//! functions of their input. The [`io`] and [`site`] modules wrap them with
//! the file handling needed to build a whole site.

pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
pub use parsing::{
    ConvertError, markdown_to_html, markdown_to_tree,
    blocks::{BlockKind, assemble, classify, split_into_blocks},
    inline::{InlineError, SpanKind, TextSpan, text_to_spans, tokenize},
    title::{TitleError, extract_title},
};
pub use site::{
    BuildSummary, ContentPage, SiteError, SiteOptions, build_site, generate_page,
    generate_pages_recursive,
};
