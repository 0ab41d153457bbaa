// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Extracts '#' comments from raw YAML text, with enough context tracking to
// ignore '#' characters inside quoted scalars and block-scalar content.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceComment {
    // Verbatim comment text, '#' included, trailing whitespace stripped.
    pub text: String,
    // 1-based line, 0-based column, matching the parser's markers.
    pub line: usize,
    pub col: usize,
}

pub fn scan_comments(input: &str) -> Vec<SourceComment> {
    let mut comments = Vec::new();
    let mut in_double = false;
    let mut in_single = false;
    let mut block_indent: Option<usize> = None;

    for (line_index, line) in input.lines().enumerate() {
        let line_no = line_index + 1;
        let indent = line.chars().take_while(|c| *c == ' ').count();
        let blank = line.trim().is_empty();

        // Everything indented past a block-scalar header is content.
        if let Some(header_indent) = block_indent {
            if blank || indent > header_indent {
                continue;
            }
            block_indent = None;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut comment_start = None;
        let mut prev: Option<char> = None;
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if in_double {
                match c {
                    '\\' => i += 1,
                    '"' => in_double = false,
                    _ => {}
                }
            } else if in_single {
                if c == '\'' {
                    // '' is an escaped quote inside a single-quoted scalar.
                    if chars.get(i + 1) == Some(&'\'') {
                        i += 1;
                    } else {
                        in_single = false;
                    }
                }
            } else {
                match c {
                    '"' if opens_scalar(prev) => in_double = true,
                    '\'' if opens_scalar(prev) => in_single = true,
                    '#' if prev.map_or(true, |p| p == ' ' || p == '\t') => {
                        comment_start = Some(i);
                        break;
                    }
                    _ => {}
                }
            }
            prev = Some(c);
            i += 1;
        }

        if let Some(start) = comment_start {
            let text: String = chars[start..].iter().collect();
            comments.push(SourceComment {
                text: text.trim_end().to_string(),
                line: line_no,
                col: start,
            });
        }

        let content_end = comment_start.unwrap_or(chars.len());
        let content: String = chars[..content_end].iter().collect();
        if !in_double && !in_single && ends_with_block_indicator(&content) {
            block_indent = Some(indent);
        }
    }

    comments
}

// A quote only opens a scalar in value position; quotes in the middle of a
// plain scalar (it's, a"b) are ordinary characters.
fn opens_scalar(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => matches!(c, ' ' | '\t' | ':' | ',' | '[' | '{' | '-' | '?'),
    }
}

// Matches a trailing block-scalar header token: '|' or '>' with optional
// chomping ('+'/'-') and indentation-indicator digits, e.g. "|", ">-", "|2+".
fn ends_with_block_indicator(content: &str) -> bool {
    let Some(last) = content.split_whitespace().last() else {
        return false;
    };
    let mut chars = last.chars();
    if !matches!(chars.next(), Some('|' | '>')) {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    match rest[..] {
        [] => true,
        [c] => c == '+' || c == '-' || c.is_ascii_digit(),
        [c1, c2] => {
            (c1.is_ascii_digit() && (c2 == '+' || c2 == '-'))
                || ((c1 == '+' || c1 == '-') && c2.is_ascii_digit())
        }
        _ => false,
    }
}
