// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Algorithm discriminators.
//!
//! Algorithms are unique by their relationship to a processor and the window
//! that triggers them, so the discriminator covers exactly those fields and
//! nothing descriptive. CRC-32 collisions are accepted at the cardinality of
//! algorithms a single processor registers.

use std::fmt;

use crate::definition::{AlgorithmSchema, ProcessorSchema};

/// The six fields that identify an algorithm, in hashing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmKey<'a> {
    pub processor_name: &'a str,
    pub connection_str: &'a str,
    pub window_name: &'a str,
    pub window_version: &'a str,
    pub algorithm_name: &'a str,
    pub algorithm_version: &'a str,
}

impl<'a> AlgorithmKey<'a> {
    /// Borrow the identifying fields of `algorithm` registered on `processor`.
    pub fn new(processor: &'a ProcessorSchema, algorithm: &'a AlgorithmSchema) -> Self {
        Self {
            processor_name: &processor.name,
            connection_str: &processor.connection_str,
            window_name: &algorithm.window_type.name,
            window_version: &algorithm.window_type.version,
            algorithm_name: &algorithm.name,
            algorithm_version: &algorithm.version,
        }
    }

    fn parts(&self) -> [&'a str; 6] {
        [
            self.processor_name,
            self.connection_str,
            self.window_name,
            self.window_version,
            self.algorithm_name,
            self.algorithm_version,
        ]
    }
}

/// CRC-32 (IEEE) discriminator for an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmHash(u32);

impl AlgorithmHash {
    /// Hash the key's fields back to back, without separators.
    pub fn compute(key: &AlgorithmKey<'_>) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        for part in key.parts() {
            hasher.update(part.as_bytes());
        }
        Self(hasher.finalize())
    }

    /// Raw checksum value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Zero-padded, eight character, lower-case hex form.
    pub fn to_hex(&self) -> String {
        format!("{:08x}", self.0)
    }
}

impl fmt::Display for AlgorithmHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
