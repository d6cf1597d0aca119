// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Stub model handed to the renderer.

use serde::{Serialize, Serializer};

use crate::definition::ResultType;

/// Result wrapper an algorithm is typed with in the stub.
///
/// Serializes as its Python type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCategory {
    Struct,
    Value,
    None,
    Array,
}

impl ReturnCategory {
    /// Classify a result type. Returns `None` for `NotSpecified`.
    pub fn classify(result_type: ResultType) -> Option<Self> {
        match result_type {
            ResultType::Struct => Some(ReturnCategory::Struct),
            ResultType::Value => Some(ReturnCategory::Value),
            ResultType::None => Some(ReturnCategory::None),
            ResultType::Array => Some(ReturnCategory::Array),
            ResultType::NotSpecified => None,
        }
    }

    /// Python type name the stub uses for this category.
    pub fn type_name(&self) -> &'static str {
        match self {
            ReturnCategory::Struct => "StructResult",
            ReturnCategory::Value => "ValueResult",
            ReturnCategory::None => "NoneResult",
            ReturnCategory::Array => "ArrayResult",
        }
    }
}

impl Serialize for ReturnCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}

impl std::fmt::Display for ReturnCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A metadata field, deduplicated by key within one processor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetadataEntry {
    pub var_name: String,
    pub key_name: String,
    pub description: String,
}

/// A window type, deduplicated by `(name, version)` within one processor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WindowEntry {
    pub var_name: String,
    pub name: String,
    pub version: String,
    pub description: String,
    /// Variable names of the metadata entries this window carries.
    pub metadata_var_names: Vec<String>,
}

/// One supported algorithm. Never deduplicated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AlgorithmEntry {
    pub name: String,
    pub var_name: String,
    pub processor_name: String,
    pub version: String,
    pub return_type: ReturnCategory,
    /// Variable name of the `WindowEntry` that triggers this algorithm.
    pub window_var_name: String,
    pub hash: String,
}

/// Everything the stub declares for one processor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessorEntry {
    pub name: String,
    pub metadata: Vec<MetadataEntry>,
    pub windows: Vec<WindowEntry>,
    pub algorithms: Vec<AlgorithmEntry>,
}

impl ProcessorEntry {
    /// Look up a window entry by its variable name.
    pub fn window(&self, var_name: &str) -> Option<&WindowEntry> {
        self.windows.iter().find(|w| w.var_name == var_name)
    }

    /// Look up a metadata entry by its original key.
    pub fn metadata_field(&self, key_name: &str) -> Option<&MetadataEntry> {
        self.metadata.iter().find(|m| m.key_name == key_name)
    }
}

/// Template input: one entry per processor, in registration order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Bundle {
    pub processors: Vec<ProcessorEntry>,
}
