//! Pipeline tests: whole documents through `BlockParser`.
//!
//! Token streams are compared as text outlines with inline `insta` snapshots.

use pretty_assertions::assert_eq;

use crate::parsing::{
    BlockParser, ParsedDoc,
    front_matter::{FrontMatterOptions, register},
    snapshot,
};

fn parse(src: &str) -> ParsedDoc {
    let parser = BlockParser::with_front_matter(FrontMatterOptions::default()).unwrap();
    let doc = parser.parse_str(src);
    snapshot::invariants(&doc.tokens, doc.line_count);
    doc
}

#[test]
fn front_matter_then_blocks() {
    let doc = parse(
        "---\ntitle: Hello\ntags: [a, b]\n---\n# Heading\n\nSome text\nmore text\n\n```rust\nfn main() {}\n```\n",
    );
    insta::assert_snapshot!(snapshot::outline(&doc.tokens), @r"
    front_matter [0, 4) hidden markup=--- meta=title: Hello\ntags: [a, b]
    heading1 [4, 5) markup=# content=Heading
    paragraph [6, 8) content=Some text\nmore text
    fence [9, 12) markup=``` meta=rust content=fn main() {}\n
    ");
}

#[test]
fn marker_line_after_text_is_a_thematic_break() {
    let doc = parse("Intro line\n---\nafter\n");
    assert!(doc.front_matter.is_none());
    insta::assert_snapshot!(snapshot::outline(&doc.tokens), @r"
    paragraph [0, 1) content=Intro line
    hr [1, 2) markup=---
    paragraph [2, 3) content=after
    ");
}

#[test]
fn unterminated_front_matter_swallows_document() {
    let doc = parse("---\nx: 1\n\nstill meta");
    insta::assert_snapshot!(snapshot::outline(&doc.tokens), @r"
    front_matter [0, 4) hidden markup=--- meta=x: 1\n\nstill meta
    ");
}

#[test]
fn table_after_front_matter() {
    let doc = parse("---\na: 1\n---\n| a | b |\n| --- | --- |\n| 1 | 2 |\n");
    insta::assert_snapshot!(snapshot::outline(&doc.tokens), @r"
    front_matter [0, 3) hidden markup=--- meta=a: 1
    table [3, 6) markup=| content=| a | b |\n| --- | --- |\n| 1 | 2 |
    ");
}

#[test]
fn without_front_matter_rule_markers_are_breaks() {
    let parser = BlockParser::new();
    let doc = parser.parse_str("---\na: 1\n---\nBody");
    snapshot::invariants(&doc.tokens, doc.line_count);
    assert!(doc.front_matter.is_none());
    insta::assert_snapshot!(snapshot::outline(&doc.tokens), @r"
    hr [0, 1) markup=---
    paragraph [1, 2) content=a: 1
    hr [2, 3) markup=---
    paragraph [3, 4) content=Body
    ");
}

#[test]
fn disabled_handle_turns_rule_off() {
    let mut parser = BlockParser::new();
    let handle = register(parser.ruler_mut(), FrontMatterOptions::default()).unwrap();
    assert!(parser.parse_str("---\na: 1\n---\n").front_matter.is_some());

    parser.ruler_mut().set_enabled(&handle, false).unwrap();
    assert!(parser.parse_str("---\na: 1\n---\n").front_matter.is_none());
}

#[test]
fn blockquote_lines_group() {
    let doc = parse("> quote\n> more\n\ntext");
    insta::assert_snapshot!(snapshot::outline(&doc.tokens), @r"
    blockquote [0, 2) markup=> meta=1 content=quote\nmore
    paragraph [3, 4) content=text
    ");
}

#[test]
fn front_matter_block_exposes_raw_text() {
    let doc = parse("---\na: 1\n---\nBody");
    let fm = doc.front_matter.as_ref().unwrap();
    assert_eq!(fm.markup, "---");
    assert_eq!(fm.raw, "a: 1");
    assert_eq!(fm.map, [0, 3]);
    assert_eq!(doc.body_start(), 13);
}

#[test]
fn body_start_without_front_matter_is_zero() {
    let doc = parse("Body\n");
    assert_eq!(doc.body_start(), 0);
}

#[test]
fn body_start_of_unterminated_block_is_end_of_input() {
    let src = "---\nx: 1\n";
    let doc = parse(src);
    assert_eq!(doc.body_start(), src.len());
}

/// Re-parsing a body that does not start with a marker run finds no front matter.
#[test]
fn reparsing_body_does_not_retrigger() {
    let src = "---\na: 1\n---\n\nBody --- text\n---\n";
    let doc = parse(src);
    let body = src[doc.body_start()..].trim();
    let again = parse(body);
    assert!(again.front_matter.is_none());
}

#[test]
fn only_first_line_may_open_front_matter() {
    let doc = parse("\n---\na: 1\n---\n");
    assert!(doc.front_matter.is_none());
}

#[test]
fn empty_document() {
    let doc = parse("");
    assert!(doc.tokens.is_empty());
    assert!(doc.front_matter.is_none());
}
