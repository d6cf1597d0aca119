// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Mapping of internal state into the stub model.
//!
//! Window types and metadata fields are shared by many algorithms, so each
//! processor collects them into keyed maps before flattening. Deduplication
//! is scoped to a single processor. Algorithms are kept one-to-one with the
//! input.

use std::collections::BTreeMap;

use tracing::debug;

use crate::definition::{AlgorithmSchema, InternalState, ProcessorSchema};
use crate::error::{Result, StubError};
use crate::hash::{AlgorithmHash, AlgorithmKey};
use crate::ident::sanitise_name;
use crate::model::{
    AlgorithmEntry, Bundle, MetadataEntry, ProcessorEntry, ReturnCategory, WindowEntry,
};

/// Map every processor in `state` into the stub model, preserving order.
///
/// Stops at the first algorithm whose result type is not specified.
pub fn map_state(state: &InternalState) -> Result<Bundle> {
    let processors = state
        .processors
        .iter()
        .map(map_processor)
        .collect::<Result<Vec<_>>>()?;

    Ok(Bundle { processors })
}

fn map_processor(processor: &ProcessorSchema) -> Result<ProcessorEntry> {
    let mut windows: BTreeMap<(String, String), WindowEntry> = BTreeMap::new();
    let mut metadata: BTreeMap<String, MetadataEntry> = BTreeMap::new();
    let mut algorithms = Vec::with_capacity(processor.supported_algorithms.len());

    for algorithm in &processor.supported_algorithms {
        let window = &algorithm.window_type;

        // Recomputed on every visit; only kept if this is the first time the
        // window is seen.
        let mut metadata_var_names = Vec::with_capacity(window.metadata_fields.len());
        for field in &window.metadata_fields {
            let entry = metadata
                .entry(field.name.clone())
                .or_insert_with(|| MetadataEntry {
                    var_name: metadata_var_name(&field.name),
                    key_name: field.name.clone(),
                    description: field.description.clone(),
                });
            metadata_var_names.push(entry.var_name.clone());
        }

        windows
            .entry((window.name.clone(), window.version.clone()))
            .or_insert_with(|| WindowEntry {
                var_name: window_var_name(&window.name, &window.version),
                name: window.name.clone(),
                version: window.version.clone(),
                description: window.description.clone(),
                metadata_var_names,
            });

        algorithms.push(map_algorithm(processor, algorithm)?);
    }

    debug!(
        processor = %processor.name,
        metadata = metadata.len(),
        windows = windows.len(),
        algorithms = algorithms.len(),
        "Mapped processor."
    );

    Ok(ProcessorEntry {
        name: processor.name.clone(),
        metadata: metadata.into_values().collect(),
        windows: windows.into_values().collect(),
        algorithms,
    })
}

fn map_algorithm(
    processor: &ProcessorSchema,
    algorithm: &AlgorithmSchema,
) -> Result<AlgorithmEntry> {
    let return_type = ReturnCategory::classify(algorithm.result_type).ok_or_else(|| {
        StubError::UnspecifiedResultType {
            algorithm: algorithm.name.clone(),
            algorithm_version: algorithm.version.clone(),
            processor: processor.name.clone(),
            runtime: processor.runtime.clone(),
        }
    })?;

    let hash = AlgorithmHash::compute(&AlgorithmKey::new(processor, algorithm)).to_hex();
    let window = &algorithm.window_type;

    Ok(AlgorithmEntry {
        name: algorithm.name.clone(),
        var_name: sanitise_name(&format!("{}_{}", algorithm.name, hash)),
        processor_name: processor.name.clone(),
        version: algorithm.version.clone(),
        return_type,
        // Must stay byte-identical to the WindowEntry var name.
        window_var_name: window_var_name(&window.name, &window.version),
        hash,
    })
}

fn metadata_var_name(field_name: &str) -> String {
    sanitise_name(&format!("{field_name}_stub"))
}

fn window_var_name(name: &str, version: &str) -> String {
    sanitise_name(&format!("{name}_{version}_stub"))
}
