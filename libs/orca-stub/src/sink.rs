// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Writing rendered stubs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StubError};

/// Write `contents` to `out_dir/file_name`, creating `out_dir` if needed.
///
/// An existing directory or file is not an error; the file is overwritten.
pub fn write_stub(out_dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|source| StubError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(file_name);
    fs::write(&path, contents).map_err(|source| StubError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
