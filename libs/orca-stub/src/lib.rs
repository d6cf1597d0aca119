// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Python type-stub generation for Orca processors.
//!
//! This crate provides:
//! - Internal state definitions and YAML/JSON loading
//! - Mapping into a deduplicated stub model with stable algorithm hashes
//! - Tera-based `.pyi` rendering
//!
//! # Example
//!
//! ```no_run
//! use orca_stub::{generate_stub, parse_state_yaml, PythonStubRenderer};
//! use std::path::Path;
//!
//! let yaml = r#"
//! processors:
//!   - name: metrics
//!     connection_str: localhost:5377
//!     supported_algorithms:
//!       - name: mean
//!         version: 1.0.0
//!         result_type: VALUE
//!         window_type: { name: tumble, version: v1 }
//! "#;
//!
//! let state = parse_state_yaml(yaml).unwrap();
//! let renderer = PythonStubRenderer::new().unwrap();
//! generate_stub(&state, &renderer, Path::new("stubs")).unwrap();
//! ```

pub mod codegen;
pub mod definition;
pub mod error;
pub mod generate;
pub mod hash;
pub mod ident;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod sink;

pub use codegen::{PythonStubRenderer, StubRenderer, DEFAULT_STUB_FILE};
pub use definition::{
    AlgorithmSchema, InternalState, MetadataFieldSchema, ProcessorSchema, ResultType,
    WindowSchema,
};
pub use error::{Result, StubError};
pub use generate::generate_stub;
pub use hash::{AlgorithmHash, AlgorithmKey};
pub use ident::{sanitise_name, to_identifier_case};
pub use mapper::map_state;
pub use model::{
    AlgorithmEntry, Bundle, MetadataEntry, ProcessorEntry, ReturnCategory, WindowEntry,
};
pub use parser::{parse_state_file, parse_state_json, parse_state_yaml};
pub use sink::write_stub;
