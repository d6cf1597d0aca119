// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Error types for stub generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading state, mapping it, or writing stubs.
#[derive(Debug, Error)]
pub enum StubError {
    /// Failed to parse a YAML state file.
    #[error("failed to parse state YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Failed to parse a JSON state file.
    #[error("failed to parse state JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// State file not found.
    #[error("state file not found: {path}")]
    FileNotFound { path: String },

    /// Failed to read a state or template file.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// An algorithm was registered without a result type.
    #[error(
        "result type not specified for algorithm {algorithm}_{algorithm_version} on processor {processor}_{runtime}"
    )]
    UnspecifiedResultType {
        algorithm: String,
        algorithm_version: String,
        processor: String,
        runtime: String,
    },

    /// Mapping the internal state into the stub model failed.
    #[error("could not parse internal state: {0}")]
    InvalidState(#[source] Box<StubError>),

    /// Template parsing or rendering failed.
    #[error("stub template failed: {0}")]
    Template(#[from] tera::Error),

    /// Creating the output directory or writing the stub failed.
    #[error("failed to write stub to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for stub operations.
pub type Result<T> = std::result::Result<T, StubError>;
