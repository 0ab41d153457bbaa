// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use anyhow::Error;

use crate::{loader, renderer::Renderer};

// Public entry point: configures a conversion and runs loader then renderer.
pub struct Converter {
    indent: usize,
    tab: bool,
    collapse_nested_literals: bool,
}

impl Converter {
    pub fn new() -> Converter {
        Converter {
            indent: 2,
            tab: false,
            collapse_nested_literals: false,
        }
    }

    pub fn indent(mut self, width: usize) -> Converter {
        self.indent = width.max(1);
        self
    }

    // Indent with a tab character instead of spaces.
    pub fn tab(mut self) -> Converter {
        self.tab = true;
        self
    }

    pub fn collapse_nested_literals(mut self) -> Converter {
        self.collapse_nested_literals = true;
        self
    }

    pub fn convert(&self, input: &str) -> Result<String, Error> {
        let document = loader::load_str(input)?;

        let indent_unit = if self.tab {
            "\t".to_string()
        } else {
            " ".repeat(self.indent)
        };

        let mut renderer = Renderer::new(&indent_unit);
        if self.collapse_nested_literals {
            renderer = renderer.collapse_nested_literals();
        }

        Ok(renderer.render(&document))
    }
}

impl Default for Converter {
    fn default() -> Converter {
        Converter::new()
    }
}

pub fn convert(input: &str) -> Result<String, Error> {
    Converter::new().convert(input)
}
