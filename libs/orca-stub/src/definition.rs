// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Internal state definition types.
//!
//! These mirror the registry snapshot a running Orca core holds: every
//! registered processor with the algorithms it supports, each bound to a
//! window type carrying metadata fields. Absent fields default to empty,
//! matching the optional-field semantics of the exchange format the state
//! is normally serialized in.

use serde::{Deserialize, Serialize};

// ============================================================================
// Result Types
// ============================================================================

/// Shape of the value an algorithm produces.
///
/// `NotSpecified` is what an unset field decodes to. It is accepted here and
/// rejected when the state is mapped into the stub model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultType {
    #[default]
    #[serde(alias = "UNSPECIFIED")]
    NotSpecified,
    Struct,
    Value,
    Array,
    None,
}

// ============================================================================
// State Types
// ============================================================================

/// Snapshot of every processor registered with the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InternalState {
    #[serde(default)]
    pub processors: Vec<ProcessorSchema>,
}

/// A registered processor and the algorithms it exposes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessorSchema {
    #[serde(default)]
    pub name: String,

    /// Runtime label reported by the processor (e.g. `python3.12`).
    #[serde(default)]
    pub runtime: String,

    /// Address the core uses to reach the processor.
    #[serde(default)]
    pub connection_str: String,

    #[serde(default)]
    pub supported_algorithms: Vec<AlgorithmSchema>,
}

/// A named, versioned computation bound to one window type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlgorithmSchema {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub result_type: ResultType,

    #[serde(default)]
    pub window_type: WindowSchema,
}

/// Window type that triggers an algorithm.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowSchema {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub metadata_fields: Vec<MetadataFieldSchema>,
}

/// Auxiliary value attached to a window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataFieldSchema {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}
