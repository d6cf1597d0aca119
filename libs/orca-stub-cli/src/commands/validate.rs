// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! State validation command.

use anyhow::{Context, Result};
use orca_stub::{map_state, parse_state_file};
use std::path::Path;

/// Parse and map a state file, printing what the stub would declare.
pub fn run(path: &Path) -> Result<()> {
    println!("Validating processor state: {}", path.display());

    let state = parse_state_file(path)
        .with_context(|| format!("Failed to load state from {}", path.display()))?;

    let bundle = map_state(&state).context("Validation failed")?;

    for processor in &bundle.processors {
        println!();
        println!("  Processor:   {}", processor.name);
        println!("  Metadata:    {}", processor.metadata.len());
        println!("  Windows:     {}", processor.windows.len());
        if !processor.algorithms.is_empty() {
            println!("  Algorithms:");
            for algorithm in &processor.algorithms {
                println!(
                    "    - {} ({}, window {})",
                    algorithm.var_name,
                    algorithm.return_type,
                    algorithm.window_var_name
                );
            }
        }
    }
    println!();
    println!("Processor state is valid.");
    Ok(())
}
