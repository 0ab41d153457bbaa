// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Converts YAML documents into a braced, comment-preserving notation:
// mappings become `{ }`, sequences become `[ ]`, strings are re-quoted, and
// every comment stays at its original attachment point.

mod ast;
mod convert;
mod loader;
mod renderer;

pub use convert::{convert, Converter};
