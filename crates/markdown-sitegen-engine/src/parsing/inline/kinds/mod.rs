//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - raw zone, split first so nothing inside is re-parsed
//! - **`Strong`**: `**`
//! - **`Emphasis`**: `*` - only sees text left over after `Strong` has run
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, never when preceded by `!`
//!
//! The tokenizer reads these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use image::Image;
pub use link::Link;

use std::ops::Range;

/// An image or link construct found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMatch<'a> {
    /// Byte range of the whole construct, brackets and parentheses included.
    pub range: Range<usize>,
    /// Link text or image alt text.
    pub text: &'a str,
    pub url: &'a str,
}
