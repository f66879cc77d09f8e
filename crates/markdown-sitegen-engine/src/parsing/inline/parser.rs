use super::{
    kinds::{CodeSpan, Emphasis, Image, Link, Strong, TargetMatch},
    types::{SpanKind, TextSpan},
};

/// Failure to tokenize inline markdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Invalid Markdown: unmatched delimiter '{delimiter}'")]
    UnmatchedDelimiter { delimiter: &'static str },
}

/// Tokenizes inline markdown into an ordered sequence of [`TextSpan`]s.
///
/// Stages run in a fixed precedence order, each one only splitting spans that
/// are still [`SpanKind::Plain`]:
///
/// 1. code spans (raw zone)
/// 2. bold
/// 3. italic
/// 4. images
/// 5. links
///
/// The delimiter stages keep empty plain segments at the boundaries, so
/// `` `a` `` yields `["", a, ""]`. The image and link stages never emit empty
/// plain spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_delimiter(spans, CodeSpan::TICK, SpanKind::Code)?;
    let spans = split_spans_delimiter(spans, Strong::DELIM, SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, Emphasis::DELIM, SpanKind::Italic)?;
    let spans = split_spans_image(spans);
    Ok(split_spans_link(spans))
}

/// Alias for [`tokenize`]; the two behave identically.
///
/// Empty input yields a single empty plain span.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    tokenize(text)
}

/// Splits every plain span on `delimiter`, alternating plain and `kind`.
///
/// Splitting must produce an odd number of segments; anything else means a
/// delimiter was opened and never closed.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(InlineError::UnmatchedDelimiter { delimiter });
        }
        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::new(part, kind));
            }
        }
    }
    Ok(out)
}

/// Splits image syntax out of every plain span.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, Image::find_all, |alt, url| TextSpan::image(alt, url))
}

/// Splits link syntax out of every plain span.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, Link::find_all, |text, url| TextSpan::link(text, url))
}

fn split_spans_matching(
    spans: Vec<TextSpan>,
    find_all: fn(&str) -> Vec<TargetMatch<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let text = span.content.as_str();
        let found = find_all(text);
        if found.is_empty() {
            out.push(TextSpan::plain(text));
            continue;
        }

        let mut rest_start = 0;
        for m in found {
            let before = &text[rest_start..m.range.start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(make(m.text, m.url));
            rest_start = m.range.end;
        }
        let rest = &text[rest_start..];
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}
