// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use tracing::warn;

use crate::ast::{
    Comments, Document, Entry, LiteralBlock, Mapping, Node, Scalar, ScalarKind, Sequence,
    Unsupported,
};

// One rendering pass over one document. `pending` holds trailing comments
// discovered while rendering the current line; they are flushed after the
// comma, before the newline.
pub struct RendererRun<'a> {
    indent_unit: &'a str,
    collapse_nested_literals: bool,
    out: String,
    pending: Vec<&'a str>,
}

impl<'a> RendererRun<'a> {
    pub fn new(indent_unit: &'a str, collapse_nested_literals: bool) -> RendererRun<'a> {
        RendererRun {
            indent_unit,
            collapse_nested_literals,
            out: String::new(),
            pending: Vec::new(),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn render_document(&mut self, document: &'a Document) {
        for node in &document.nodes {
            self.render_root(node);
        }
        for comment in &document.trailing_comments {
            self.out.push_str(comment);
            self.out.push('\n');
        }
    }

    // Root nodes are rendered bare: no enclosing brackets, no commas.
    fn render_root(&mut self, node: &'a Node) {
        match node {
            Node::Mapping(mapping) => self.render_mapping(mapping, 0),
            Node::Sequence(sequence) => self.render_sequence(sequence, 0),
            Node::Scalar(_) | Node::LiteralBlock(_) | Node::Unsupported(_) => {
                self.render_leading(node.comments(), 0);
                self.render_node(node, 0);
                self.end_line();
            }
        }
    }

    fn render_node(&mut self, node: &'a Node, depth: usize) {
        match node {
            Node::Scalar(scalar) => self.render_scalar(scalar),
            Node::LiteralBlock(block) => self.render_literal_block(block, depth),
            Node::Mapping(mapping) => self.render_mapping(mapping, depth),
            Node::Sequence(sequence) => self.render_sequence(sequence, depth),
            Node::Unsupported(unsupported) => self.render_unsupported(unsupported),
        }
    }

    fn render_scalar(&mut self, scalar: &'a Scalar) {
        match scalar.kind {
            // Strings are always re-quoted, whatever the source style.
            ScalarKind::String => {
                let quoted = quote_string(&scalar.raw);
                self.out.push_str(&quoted);
            }
            // Everything else is echoed exactly as written in the source.
            ScalarKind::Integer | ScalarKind::Float | ScalarKind::Boolean | ScalarKind::Null => {
                self.out.push_str(&scalar.raw);
            }
        }
        if let Some(trailing) = &scalar.comments.trailing {
            self.pending.push(trailing);
        }
    }

    fn render_mapping(&mut self, mapping: &'a Mapping, depth: usize) {
        if depth > 0 {
            self.out.push('{');
            self.render_open_comment(&mapping.comments);
            self.end_line();
        }
        self.render_leading(&mapping.comments, depth);

        let last = mapping.entries.len().saturating_sub(1);
        for (i, entry) in mapping.entries.iter().enumerate() {
            self.render_entry(entry, depth, i == last);
        }

        if depth > 0 {
            self.push_indent(depth - 1);
            self.out.push('}');
        }
    }

    fn render_entry(&mut self, entry: &'a Entry, depth: usize, last: bool) {
        self.render_leading(&entry.key.comments, depth);
        // A leading comment on an inline value surfaces above the entry;
        // containers render theirs inside the brackets.
        match &entry.value {
            Node::Scalar(_) | Node::LiteralBlock(_) | Node::Unsupported(_) => {
                self.render_leading(entry.value.comments(), depth);
            }
            Node::Mapping(_) | Node::Sequence(_) => {}
        }

        self.push_indent(depth);
        self.out.push_str(&entry.key.raw);
        self.out.push_str(": ");
        self.render_node(&entry.value, depth + 1);

        if !last && depth > 0 {
            self.out.push(',');
        }
        if let Some(trailing) = &entry.key.comments.trailing {
            self.pending.push(trailing);
        }
        self.end_line();
    }

    fn render_sequence(&mut self, sequence: &'a Sequence, depth: usize) {
        if depth > 0 {
            self.out.push('[');
            self.render_open_comment(&sequence.comments);
            self.end_line();
        }
        self.render_leading(&sequence.comments, depth);

        let last = sequence.items.len().saturating_sub(1);
        for (i, item) in sequence.items.iter().enumerate() {
            match item {
                Node::Scalar(_) | Node::LiteralBlock(_) | Node::Unsupported(_) => {
                    self.render_leading(item.comments(), depth);
                }
                Node::Mapping(_) | Node::Sequence(_) => {}
            }

            self.push_indent(depth);
            self.render_node(item, depth + 1);

            if i != last && depth > 0 {
                self.out.push(',');
            }
            self.end_line();
        }

        if depth > 0 {
            self.push_indent(depth - 1);
            self.out.push(']');
        }
    }

    fn render_literal_block(&mut self, block: &'a LiteralBlock, depth: usize) {
        if self.collapse_nested_literals && depth > 1 {
            let quoted = quote_string(block.raw.trim());
            self.out.push_str(&quoted);
            if let Some(trailing) = &block.comments.trailing {
                self.pending.push(trailing);
            }
            return;
        }

        self.out.push('|');
        if !block.raw.ends_with('\n') {
            self.out.push('-');
        }
        self.render_open_comment(&block.comments);
        for line in block.raw.lines() {
            self.out.push('\n');
            if !line.is_empty() {
                self.push_indent(depth);
                self.out.push_str(line);
            }
        }
    }

    fn render_unsupported(&mut self, unsupported: &'a Unsupported) {
        warn!(
            kind = %unsupported.kind,
            line = unsupported.pos.line,
            "no rendering rule for node, emitting placeholder"
        );
        self.out.push_str("[x ");
        self.out.push_str(&unsupported.kind);
        self.out.push(']');
        if let Some(trailing) = &unsupported.comments.trailing {
            self.pending.push(trailing);
        }
    }

    fn render_leading(&mut self, comments: &'a Comments, depth: usize) {
        for line in &comments.leading {
            self.push_indent(depth);
            self.out.push_str(line);
            self.out.push('\n');
        }
    }

    // A trailing comment that rides an opening bracket or block header.
    fn render_open_comment(&mut self, comments: &'a Comments) {
        if let Some(trailing) = &comments.trailing {
            self.out.push(' ');
            self.out.push_str(trailing);
        }
    }

    fn push_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(self.indent_unit);
        }
    }

    fn end_line(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for comment in pending {
            self.out.push(' ');
            self.out.push_str(comment);
        }
        self.out.push('\n');
    }
}

pub(crate) fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
