// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Stub generation command.

use anyhow::{Context, Result};
use orca_stub::{generate_stub, parse_state_file, PythonStubRenderer};
use tracing::debug;

use crate::config::GenerateSettings;

/// Generate the stub described by `settings`.
pub fn run(settings: &GenerateSettings) -> Result<()> {
    let state = parse_state_file(&settings.schema)
        .with_context(|| format!("Failed to load state from {}", settings.schema.display()))?;

    let renderer = match &settings.template {
        Some(path) => {
            debug!(template = %path.display(), "Using custom stub template.");
            let template = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            PythonStubRenderer::with_template(&template)?
        }
        None => PythonStubRenderer::new()?,
    };
    let renderer = match &settings.file_name {
        Some(file_name) => renderer.with_file_name(file_name.clone()),
        None => renderer,
    };

    let path = generate_stub(&state, &renderer, &settings.out_dir)?;

    println!("Generated {} successfully!", path.display());
    Ok(())
}
