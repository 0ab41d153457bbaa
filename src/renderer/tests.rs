// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use super::renderer_run::quote_string;
use super::*;
use crate::ast::{
    Comments, Document, Entry, LiteralBlock, Mapping, Node, Scalar, ScalarKind, Sequence,
    SourcePos, Unsupported,
};

fn scalar(kind: ScalarKind, raw: &str) -> Scalar {
    Scalar {
        kind,
        raw: raw.to_string(),
        pos: SourcePos::default(),
        comments: Comments::default(),
    }
}

fn scalar_node(kind: ScalarKind, raw: &str) -> Node {
    Node::Scalar(scalar(kind, raw))
}

fn entry(key: &str, value: Node) -> Entry {
    Entry {
        key: scalar(ScalarKind::String, key),
        value,
    }
}

fn mapping(entries: Vec<Entry>) -> Node {
    Node::Mapping(Mapping {
        entries,
        comments: Comments::default(),
    })
}

fn sequence(items: Vec<Node>) -> Node {
    Node::Sequence(Sequence {
        items,
        comments: Comments::default(),
    })
}

fn document(nodes: Vec<Node>) -> Document {
    Document {
        nodes,
        trailing_comments: Vec::new(),
    }
}

fn render(document: &Document) -> String {
    Renderer::new("  ").render(document)
}

#[test]
fn strings_render_double_quoted() {
    let doc = document(vec![mapping(vec![entry(
        "key",
        scalar_node(ScalarKind::String, "value"),
    )])]);
    assert_eq!(render(&doc), "key: \"value\"\n");
}

#[test]
fn numeric_tokens_render_byte_for_byte() {
    let doc = document(vec![mapping(vec![
        entry("a", scalar_node(ScalarKind::Float, "1.0")),
        entry("b", scalar_node(ScalarKind::Integer, "0x1A")),
        entry("c", scalar_node(ScalarKind::Integer, "+7")),
    ])]);
    assert_eq!(render(&doc), "a: 1.0\nb: 0x1A\nc: +7\n");
}

#[test]
fn quoting_escapes_embedded_characters() {
    assert_eq!(quote_string("plain"), "\"plain\"");
    assert_eq!(quote_string("a \"b\"\nc\\"), "\"a \\\"b\\\"\\nc\\\\\"");
    assert_eq!(quote_string("tab\there"), "\"tab\\there\"");
}

#[test]
fn entry_order_is_preserved() {
    let doc = document(vec![mapping(vec![
        entry("z", scalar_node(ScalarKind::Integer, "1")),
        entry("a", scalar_node(ScalarKind::Integer, "2")),
        entry("m", scalar_node(ScalarKind::Integer, "3")),
    ])]);
    assert_eq!(render(&doc), "z: 1\na: 2\nm: 3\n");
}

#[test]
fn duplicate_keys_are_reproduced() {
    let doc = document(vec![mapping(vec![
        entry("a", scalar_node(ScalarKind::Integer, "1")),
        entry("a", scalar_node(ScalarKind::Integer, "2")),
    ])]);
    assert_eq!(render(&doc), "a: 1\na: 2\n");
}

#[test]
fn nested_mapping_gets_brackets_and_commas() {
    let doc = document(vec![mapping(vec![entry(
        "key",
        mapping(vec![
            entry("a", scalar_node(ScalarKind::Integer, "1")),
            entry("b", scalar_node(ScalarKind::Integer, "2")),
        ]),
    )])]);
    assert_eq!(render(&doc), "key: {\n  a: 1,\n  b: 2\n}\n");
}

#[test]
fn nested_sequence_gets_brackets_and_commas() {
    let doc = document(vec![mapping(vec![entry(
        "list",
        sequence(vec![
            scalar_node(ScalarKind::Integer, "1"),
            scalar_node(ScalarKind::Integer, "2"),
        ]),
    )])]);
    assert_eq!(render(&doc), "list: [\n  1,\n  2\n]\n");
}

#[test]
fn root_sequence_renders_bare() {
    let doc = document(vec![sequence(vec![
        scalar_node(ScalarKind::Integer, "1"),
        scalar_node(ScalarKind::Integer, "2"),
    ])]);
    assert_eq!(render(&doc), "1\n2\n");
}

#[test]
fn root_scalar_renders_bare() {
    let doc = document(vec![scalar_node(ScalarKind::Boolean, "true")]);
    assert_eq!(render(&doc), "true\n");
}

#[test]
fn closing_brackets_align_with_opening_indent() {
    let doc = document(vec![mapping(vec![entry(
        "servers",
        sequence(vec![mapping(vec![entry(
            "host",
            scalar_node(ScalarKind::String, "alpha"),
        )])]),
    )])]);
    assert_eq!(
        render(&doc),
        "servers: [\n  {\n    host: \"alpha\"\n  }\n]\n"
    );
}

#[test]
fn trailing_comment_lands_after_comma() {
    let mut one = scalar(ScalarKind::Integer, "1");
    one.comments.trailing = Some("# one".to_string());
    let doc = document(vec![mapping(vec![entry(
        "key",
        sequence(vec![
            Node::Scalar(one),
            scalar_node(ScalarKind::Integer, "2"),
        ]),
    )])]);
    assert_eq!(render(&doc), "key: [\n  1, # one\n  2\n]\n");
}

#[test]
fn trailing_comment_on_last_item_precedes_close() {
    let mut two = scalar(ScalarKind::Integer, "2");
    two.comments.trailing = Some("# last".to_string());
    let doc = document(vec![mapping(vec![entry(
        "key",
        sequence(vec![
            scalar_node(ScalarKind::Integer, "1"),
            Node::Scalar(two),
        ]),
    )])]);
    assert_eq!(render(&doc), "key: [\n  1,\n  2 # last\n]\n");
}

#[test]
fn container_comment_rides_opening_bracket() {
    let mut inner = Mapping {
        entries: vec![entry("a", scalar_node(ScalarKind::Integer, "1"))],
        comments: Comments::default(),
    };
    inner.comments.trailing = Some("# intro".to_string());
    let doc = document(vec![mapping(vec![entry("key", Node::Mapping(inner))])]);
    assert_eq!(render(&doc), "key: { # intro\n  a: 1\n}\n");
}

#[test]
fn container_leading_comment_renders_inside_brackets() {
    let mut inner = Mapping {
        entries: vec![entry("a", scalar_node(ScalarKind::Integer, "1"))],
        comments: Comments::default(),
    };
    inner.comments.leading = vec!["# first".to_string()];
    let doc = document(vec![mapping(vec![entry("key", Node::Mapping(inner))])]);
    assert_eq!(render(&doc), "key: {\n  # first\n  a: 1\n}\n");
}

#[test]
fn key_leading_comment_sits_above_entry() {
    let mut b = entry("b", scalar_node(ScalarKind::Integer, "2"));
    b.key.comments.leading = vec!["# note".to_string()];
    let doc = document(vec![mapping(vec![entry(
        "key",
        mapping(vec![entry("a", scalar_node(ScalarKind::Integer, "1")), b]),
    )])]);
    assert_eq!(render(&doc), "key: {\n  a: 1,\n  # note\n  b: 2\n}\n");
}

#[test]
fn key_trailing_comment_flushes_with_scalar_value() {
    let mut e = entry("key", scalar_node(ScalarKind::String, "v"));
    e.key.comments.trailing = Some("# k".to_string());
    let doc = document(vec![mapping(vec![e])]);
    assert_eq!(render(&doc), "key: \"v\" # k\n");
}

#[test]
fn unsupported_nodes_render_placeholder() {
    let doc = document(vec![mapping(vec![entry(
        "ref",
        Node::Unsupported(Unsupported {
            kind: "alias".to_string(),
            pos: SourcePos::default(),
            comments: Comments::default(),
        }),
    )])]);
    assert_eq!(render(&doc), "ref: [x alias]\n");
}

#[test]
fn literal_block_reindents_content() {
    let doc = document(vec![mapping(vec![entry(
        "text",
        Node::LiteralBlock(LiteralBlock {
            raw: "line one\nline two\n".to_string(),
            pos: SourcePos::default(),
            comments: Comments::default(),
        }),
    )])]);
    assert_eq!(render(&doc), "text: |\n  line one\n  line two\n");
}

#[test]
fn literal_block_without_final_newline_gets_chomping_marker() {
    let doc = document(vec![mapping(vec![entry(
        "text",
        Node::LiteralBlock(LiteralBlock {
            raw: "partial".to_string(),
            pos: SourcePos::default(),
            comments: Comments::default(),
        }),
    )])]);
    assert_eq!(render(&doc), "text: |-\n  partial\n");
}

#[test]
fn literal_block_keeps_blank_lines_bare() {
    let doc = document(vec![mapping(vec![entry(
        "text",
        Node::LiteralBlock(LiteralBlock {
            raw: "a\n\nb\n".to_string(),
            pos: SourcePos::default(),
            comments: Comments::default(),
        }),
    )])]);
    assert_eq!(render(&doc), "text: |\n  a\n\n  b\n");
}

#[test]
fn nested_literal_blocks_stay_verbatim_by_default() {
    let doc = document(vec![mapping(vec![entry(
        "outer",
        mapping(vec![entry(
            "inner",
            Node::LiteralBlock(LiteralBlock {
                raw: "padded text\n".to_string(),
                pos: SourcePos::default(),
                comments: Comments::default(),
            }),
        )]),
    )])]);
    assert_eq!(render(&doc), "outer: {\n  inner: |\n    padded text\n}\n");
}

#[test]
fn collapse_toggle_re_quotes_nested_literal() {
    let doc = document(vec![mapping(vec![entry(
        "outer",
        mapping(vec![entry(
            "inner",
            Node::LiteralBlock(LiteralBlock {
                raw: "padded text\n".to_string(),
                pos: SourcePos::default(),
                comments: Comments::default(),
            }),
        )]),
    )])]);
    let out = Renderer::new("  ").collapse_nested_literals().render(&doc);
    assert_eq!(out, "outer: {\n  inner: \"padded text\"\n}\n");
}

#[test]
fn collapse_toggle_keeps_root_level_blocks() {
    let doc = document(vec![mapping(vec![entry(
        "text",
        Node::LiteralBlock(LiteralBlock {
            raw: "line one\nline two\n".to_string(),
            pos: SourcePos::default(),
            comments: Comments::default(),
        }),
    )])]);
    let out = Renderer::new("  ").collapse_nested_literals().render(&doc);
    assert_eq!(out, "text: |\n  line one\n  line two\n");
}

#[test]
fn tab_indent_unit_is_honored() {
    let doc = document(vec![mapping(vec![entry(
        "key",
        mapping(vec![entry("a", scalar_node(ScalarKind::Integer, "1"))]),
    )])]);
    let out = Renderer::new("\t").render(&doc);
    assert_eq!(out, "key: {\n\ta: 1\n}\n");
}

#[test]
fn document_trailing_comments_render_last() {
    let mut doc = document(vec![mapping(vec![entry(
        "a",
        scalar_node(ScalarKind::Integer, "1"),
    )])]);
    doc.trailing_comments = vec!["# end".to_string()];
    assert_eq!(render(&doc), "a: 1\n# end\n");
}

#[test]
fn multiple_documents_concatenate() {
    let doc = document(vec![
        mapping(vec![entry("a", scalar_node(ScalarKind::Integer, "1"))]),
        mapping(vec![entry("b", scalar_node(ScalarKind::Integer, "2"))]),
    ]);
    assert_eq!(render(&doc), "a: 1\nb: 2\n");
}
