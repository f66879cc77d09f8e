//! # Inline Parsing
//!
//! Splits the text of a block into typed [`TextSpan`]s.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Strong, Emphasis, Image, Link)
//! - **`parser`**: `tokenize()` main entry point and the per-stage `split_spans_*` helpers
//!
//! ## Stage Precedence
//!
//! Code spans are split first and are never re-parsed, so `` `**x**` `` stays
//! a single code span. Emphasis is flat: bold inside italic is not supported.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlineError, text_to_spans, tokenize};
pub use types::{SpanKind, TextSpan};
