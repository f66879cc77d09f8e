use markdown_sitegen_engine::{
    ConvertError, InlineError, SpanKind, TextSpan, TitleError, extract_title, markdown_to_html,
    split_into_blocks,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn heading_and_paragraph() {
    assert_eq!(
        markdown_to_html("# Title\n\nSome **bold** text.").unwrap(),
        "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>"
    );
}

#[test]
fn empty_document() {
    assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
}

#[test]
fn ordered_list() {
    assert_eq!(
        markdown_to_html("1. a\n2. b").unwrap(),
        "<div><ol><li>a</li><li>b</li></ol></div>"
    );
}

#[test]
fn paragraphs_join_lines() {
    let md = "\nThis is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with *italic* text and `code` here\n\n";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn code_block_keeps_inline_markup() {
    let md = "```\nThis is text that *should* remain\nthe **same** even with inline stuff\n```";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div><pre><code>This is text that *should* remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn every_block_kind() {
    let md = "# Site\n\n## Intro\n\n> Quote **one**\n> continues\n\n- [home](/)\n- ![logo](/logo.png)\n\n1. first\n2. *second*\n\nplain text";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @r#"<div><h1>Site</h1><h2>Intro</h2><blockquote>Quote <b>one</b> continues</blockquote><ul><li><a href="/">home</a></li><li><img src="/logo.png" alt="logo"></img></li></ul><ol><li>first</li><li><i>second</i></li></ol><p>plain text</p></div>"#
    );
}

#[test]
fn text_is_not_escaped() {
    assert_eq!(
        markdown_to_html("a < b & <em>c</em>").unwrap(),
        "<div><p>a < b & <em>c</em></p></div>"
    );
}

#[rstest]
#[case("a **b", "**")]
#[case("# heading with `code", "`")]
#[case("- one\n- *two", "*")]
fn unmatched_delimiters_abort_the_document(#[case] md: &str, #[case] delimiter: &'static str) {
    assert_eq!(
        markdown_to_html(md),
        Err(ConvertError::Inline(InlineError::UnmatchedDelimiter {
            delimiter
        }))
    );
}

#[test]
fn tokenizer_boundary_empties() {
    assert_eq!(
        markdown_sitegen_engine::tokenize("`code1` and `code2`").unwrap(),
        vec![
            TextSpan::plain(""),
            TextSpan::new("code1", SpanKind::Code),
            TextSpan::plain(" and "),
            TextSpan::new("code2", SpanKind::Code),
            TextSpan::plain(""),
        ]
    );
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("a\n\n \n\nb")]
#[case("  x  \n\n\n\n\ty\n\n")]
fn blocks_are_never_blank(#[case] md: &str) {
    assert!(split_into_blocks(md).iter().all(|b| !b.trim().is_empty()));
}

#[test]
fn title_extraction() {
    assert_eq!(extract_title("## x\n# y").unwrap(), "y");
    assert_eq!(extract_title("no heading"), Err(TitleError::NotFound));
}
