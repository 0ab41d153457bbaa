// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod renderer_run;

#[cfg(test)]
mod tests;

use crate::ast::Document;

use renderer_run::RendererRun;

// Turns a loaded document tree into the braced output notation. Holds only
// configuration; per-call state lives in RendererRun.
pub struct Renderer {
    indent_unit: String,
    collapse_nested_literals: bool,
}

impl Renderer {
    pub fn new(indent_unit: &str) -> Renderer {
        Renderer {
            indent_unit: indent_unit.to_string(),
            collapse_nested_literals: false,
        }
    }

    // Historical behavior: literal blocks nested past a root-level entry lose
    // their block structure and become trimmed, quoted strings.
    pub fn collapse_nested_literals(mut self) -> Renderer {
        self.collapse_nested_literals = true;
        self
    }

    pub fn render(&self, document: &Document) -> String {
        let mut run = RendererRun::new(&self.indent_unit, self.collapse_nested_literals);
        run.render_document(document);
        run.finish()
    }
}
