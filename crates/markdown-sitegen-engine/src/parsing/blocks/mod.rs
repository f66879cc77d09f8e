//! # Block Parsing
//!
//! A document is handled one block at a time:
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into trimmed blocks
//! 2. **Classification** (`classify`): each block gets exactly one `BlockKind`
//! 3. **Assembly** (`assemble`): the block becomes an HTML node, with inline
//!    parsing for everything except code blocks
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists)
//! - **`split`**: `split_into_blocks`
//! - **`classify`**: `classify` and `BlockKind`
//! - **`assemble`**: `assemble` dispatch per `BlockKind`
//!
//! The grammar is flat: no nested lists or quotes, and code fences take no
//! info string.

pub mod assemble;
pub mod classify;
pub mod kinds;
pub mod split;

pub use assemble::{assemble, text_to_children};
pub use classify::{BlockKind, classify};
pub use split::split_into_blocks;
