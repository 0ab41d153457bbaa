// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Loads YAML text into a comment-annotated document tree. Parsing is a pull
// over the yaml-rust event stream; comments are scanned from the raw text
// separately and attached to the tree afterwards.

mod comments;


use std::str::Chars;

use anyhow::{anyhow, Error};
use tracing::debug;
use yaml_rust::{
    parser::Parser as YamlParser,
    scanner::{Marker, TScalarStyle, TokenType},
    Event, Yaml,
};

use crate::ast::{
    Comments, Document, Entry, LiteralBlock, Mapping, Node, Scalar, ScalarKind, Sequence,
    SourcePos, Unsupported,
};

use comments::{scan_comments, SourceComment};

pub fn load_str(input: &str) -> Result<Document, Error> {
    let yaml_parser = &mut YamlParser::new(input.chars());

    // Parse StreamStart.
    let (evt_strm_start, _) = yaml_parser.next()?;
    assert_eq!(evt_strm_start, Event::StreamStart);

    // Parse docs.
    let mut nodes = Vec::new();
    loop {
        let (event, _) = yaml_parser.peek()?;
        match event {
            Event::DocumentStart => {
                let node = parse_doc(yaml_parser)?;
                nodes.push(node);
            }
            Event::StreamEnd => break,
            _ => unreachable!(),
        }
    }

    // Parse StreamEnd.
    let (evt_strm_end, _) = yaml_parser.next()?;
    assert_eq!(evt_strm_end, Event::StreamEnd);

    let mut document = Document {
        nodes,
        trailing_comments: Vec::new(),
    };

    let comments = scan_comments(input);
    debug!(
        documents = document.nodes.len(),
        comments = comments.len(),
        "loaded yaml stream"
    );
    attach_comments(&mut document, comments);

    // Return result.
    Ok(document)
}

fn parse_doc(yaml_parser: &mut YamlParser<Chars>) -> Result<Node, Error> {
    // Parse DocumentStart.
    let (doc_start, _) = yaml_parser.next()?;
    assert_eq!(doc_start, Event::DocumentStart);

    // Parse node.
    let node = parse_node(yaml_parser)?;

    // Parse DocumentEnd.
    let (doc_end, _) = yaml_parser.next()?;
    assert_eq!(doc_end, Event::DocumentEnd);

    // Return result.
    Ok(node)
}

fn parse_node(yaml_parser: &mut YamlParser<Chars>) -> Result<Node, Error> {
    let (event, _) = yaml_parser.peek()?;
    match event {
        Event::SequenceStart(_) => parse_sequence(yaml_parser),
        Event::MappingStart(_) => parse_mapping(yaml_parser),
        Event::Scalar(_, _, _, _) => parse_scalar(yaml_parser),
        Event::Alias(_) => {
            let (_, marker) = yaml_parser.next()?;
            Ok(Node::Unsupported(Unsupported {
                kind: "alias".to_string(),
                pos: to_source_pos(&marker),
                comments: Comments::default(),
            }))
        }
        _ => unreachable!(),
    }
}

fn parse_sequence(yaml_parser: &mut YamlParser<Chars>) -> Result<Node, Error> {
    // Parse SequenceStart.
    let (seq_start, _) = yaml_parser.next()?;
    assert!(matches!(seq_start, Event::SequenceStart(..)));

    // Parse items.
    let mut items = Vec::new();
    loop {
        let (event, _) = yaml_parser.peek()?;
        match event {
            Event::SequenceStart(_) | Event::MappingStart(_) | Event::Scalar(_, _, _, _) | Event::Alias(_) => {
                let item = parse_node(yaml_parser)?;
                items.push(item);
            }
            Event::SequenceEnd => break,
            _ => unreachable!(),
        }
    }

    // Parse SequenceEnd.
    let (seq_end, _) = yaml_parser.next()?;
    assert_eq!(seq_end, Event::SequenceEnd);

    // Return result.
    Ok(Node::Sequence(Sequence {
        items,
        comments: Comments::default(),
    }))
}

fn parse_mapping(yaml_parser: &mut YamlParser<Chars>) -> Result<Node, Error> {
    // Parse MappingStart.
    let (map_start, _) = yaml_parser.next()?;
    assert!(matches!(map_start, Event::MappingStart(..)));

    // Parse entries.
    let mut entries = Vec::new();
    loop {
        let (event, _) = yaml_parser.peek()?;
        match event {
            Event::SequenceStart(_) | Event::MappingStart(_) | Event::Scalar(_, _, _, _) | Event::Alias(_) => {}
            Event::MappingEnd => break,
            _ => unreachable!(),
        }

        let key = match parse_node(yaml_parser)? {
            Node::Scalar(scalar) => scalar,
            Node::LiteralBlock(_) | Node::Mapping(_) | Node::Sequence(_) | Node::Unsupported(_) => {
                return Err(anyhow!("mapping keys must be scalars"));
            }
        };
        let value = parse_node(yaml_parser)?;

        let entry = Entry { key, value };
        entries.push(entry);
    }

    // Parse MappingEnd.
    let (map_end, _) = yaml_parser.next()?;
    assert_eq!(map_end, Event::MappingEnd);

    // Return result.
    Ok(Node::Mapping(Mapping {
        entries,
        comments: Comments::default(),
    }))
}

fn parse_scalar(yaml_parser: &mut YamlParser<Chars>) -> Result<Node, Error> {
    // Parse Scalar.
    let (scalar, marker) = yaml_parser.next()?;
    let Event::Scalar(value, style, _, tag) = scalar else {
        unreachable!()
    };

    let pos = to_source_pos(&marker);
    let comments = Comments::default();

    match (style, tag) {
        (TScalarStyle::Plain, Some(TokenType::Tag(..))) => Ok(Node::Unsupported(Unsupported {
            kind: "tag".to_string(),
            pos,
            comments,
        })),
        (TScalarStyle::Literal | TScalarStyle::Foled, _) => Ok(Node::LiteralBlock(LiteralBlock {
            raw: value,
            pos,
            comments,
        })),
        (TScalarStyle::Plain, _) => {
            let kind = classify_plain(&value);
            // An empty plain scalar is a null value; give it a token to print.
            let raw = if kind == ScalarKind::Null && value.is_empty() {
                "null".to_string()
            } else {
                value
            };
            Ok(Node::Scalar(Scalar {
                kind,
                raw,
                pos,
                comments,
            }))
        }
        _ => Ok(Node::Scalar(Scalar {
            kind: ScalarKind::String,
            raw: value,
            pos,
            comments,
        })),
    }
}

// Classification only; the scalar keeps its source text so numeric tokens
// round-trip byte-for-byte.
fn classify_plain(value: &str) -> ScalarKind {
    if value.is_empty() {
        return ScalarKind::Null;
    }
    match Yaml::from_str(value) {
        Yaml::Integer(_) => ScalarKind::Integer,
        Yaml::Real(_) => ScalarKind::Float,
        Yaml::Boolean(_) => ScalarKind::Boolean,
        Yaml::Null => ScalarKind::Null,
        _ => ScalarKind::String,
    }
}

fn to_source_pos(marker: &Marker) -> SourcePos {
    SourcePos {
        line: marker.line(),
        col: marker.col(),
    }
}

// Resolves every scanned comment onto the tree. A comment sharing a line with
// a token trails the last token starting to its left; an own-line comment
// leads the next token below it; anything after the final token trails the
// document.
fn attach_comments(document: &mut Document, comments: Vec<SourceComment>) {
    let mut tokens = Vec::new();
    for node in &document.nodes {
        collect_tokens(node, &mut tokens);
    }

    let mut leading: Vec<Vec<String>> = vec![Vec::new(); tokens.len()];
    let mut trailing: Vec<Option<String>> = vec![None; tokens.len()];

    for comment in comments {
        let same_line = tokens
            .iter()
            .rposition(|pos| pos.line == comment.line && pos.col < comment.col);
        if let Some(index) = same_line {
            trailing[index] = Some(comment.text);
            continue;
        }

        let below = tokens.iter().position(|pos| pos.line > comment.line);
        match below {
            Some(index) => leading[index].push(comment.text),
            None => document.trailing_comments.push(comment.text),
        }
    }

    let mut next = 0;
    for node in &mut document.nodes {
        apply_comments(node, &mut next, &mut leading, &mut trailing);
    }
}

// Token positions in source order. Containers have no token of their own;
// their entries and items carry the positions.
fn collect_tokens(node: &Node, tokens: &mut Vec<SourcePos>) {
    match node {
        Node::Scalar(scalar) => tokens.push(scalar.pos),
        Node::LiteralBlock(block) => tokens.push(block.pos),
        Node::Unsupported(unsupported) => tokens.push(unsupported.pos),
        Node::Mapping(mapping) => {
            for entry in &mapping.entries {
                tokens.push(entry.key.pos);
                collect_tokens(&entry.value, tokens);
            }
        }
        Node::Sequence(sequence) => {
            for item in &sequence.items {
                collect_tokens(item, tokens);
            }
        }
    }
}

// Second walk in the same order as collect_tokens, moving each token's
// resolved comments into the tree.
fn apply_comments(
    node: &mut Node,
    next: &mut usize,
    leading: &mut [Vec<String>],
    trailing: &mut [Option<String>],
) {
    match node {
        Node::Scalar(scalar) => {
            let index = *next;
            *next += 1;
            scalar.comments.leading = std::mem::take(&mut leading[index]);
            scalar.comments.trailing = trailing[index].take();
        }
        Node::LiteralBlock(block) => {
            let index = *next;
            *next += 1;
            block.comments.leading = std::mem::take(&mut leading[index]);
            block.comments.trailing = trailing[index].take();
        }
        Node::Unsupported(unsupported) => {
            let index = *next;
            *next += 1;
            unsupported.comments.leading = std::mem::take(&mut leading[index]);
            unsupported.comments.trailing = trailing[index].take();
        }
        Node::Mapping(mapping) => {
            for entry in &mut mapping.entries {
                let index = *next;
                *next += 1;
                entry.key.comments.leading = std::mem::take(&mut leading[index]);
                entry.key.comments.trailing = trailing[index].take();

                apply_comments(&mut entry.value, next, leading, trailing);

                // A comment on the key line belongs after the value's opening
                // bracket (or block header) in the output.
                if entry.key.comments.trailing.is_some() {
                    if let Some(comments) = open_comments_mut(&mut entry.value) {
                        comments.trailing = entry.key.comments.trailing.take();
                    }
                }
            }
        }
        Node::Sequence(sequence) => {
            for item in &mut sequence.items {
                apply_comments(item, next, leading, trailing);
            }
        }
    }
}

fn open_comments_mut(node: &mut Node) -> Option<&mut Comments> {
    match node {
        Node::Mapping(mapping) => Some(&mut mapping.comments),
        Node::Sequence(sequence) => Some(&mut sequence.comments),
        Node::LiteralBlock(block) => Some(&mut block.comments),
        Node::Scalar(_) | Node::Unsupported(_) => None,
    }
}
