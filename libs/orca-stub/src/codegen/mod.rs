// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Stub rendering.

pub mod python;

pub use python::{PythonStubRenderer, DEFAULT_STUB_FILE};

use crate::error::Result;
use crate::model::Bundle;

/// Turns a mapped [`Bundle`] into the text of one stub file.
///
/// Renderers are built once by the caller and passed into
/// [`generate_stub`](crate::generate_stub).
pub trait StubRenderer {
    /// Render the whole stub in memory.
    fn render(&self, bundle: &Bundle) -> Result<String>;

    /// File name the rendered stub is written to.
    fn file_name(&self) -> &str;
}
