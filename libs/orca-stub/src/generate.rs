// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Stub generation entry point.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::codegen::StubRenderer;
use crate::definition::InternalState;
use crate::error::{Result, StubError};
use crate::mapper::map_state;
use crate::sink::write_stub;

/// Map `state`, render it with `renderer`, and write the stub into `out_dir`.
///
/// Nothing is written unless mapping and rendering both succeed. Returns the
/// path of the written stub.
pub fn generate_stub(
    state: &InternalState,
    renderer: &dyn StubRenderer,
    out_dir: &Path,
) -> Result<PathBuf> {
    let bundle = map_state(state).map_err(|e| StubError::InvalidState(Box::new(e)))?;
    let stub = renderer.render(&bundle)?;
    let path = write_stub(out_dir, renderer.file_name(), &stub)?;

    info!(
        path = %path.display(),
        processors = bundle.processors.len(),
        "Generated stub."
    );

    Ok(path)
}
