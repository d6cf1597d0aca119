// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Project configuration from `pyproject.toml`.
//!
//! ```toml
//! [tool.orca]
//! schema = "state/internal_state.yaml"
//! stub_dir = "src/my_processor/stubs"
//! stub_file = "orca_stub.pyi"
//! template = "templates/custom.pyi.tera"
//! ```
//!
//! Relative paths resolve against the directory holding the project file.
//! Command-line flags take precedence over every key.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// pyproject.toml structure for reading [tool.orca] settings.
#[derive(Deserialize)]
struct PyProjectToml {
    tool: Option<PyProjectTool>,
}

#[derive(Deserialize)]
struct PyProjectTool {
    orca: Option<ProjectConfig>,
}

/// Settings read from the `[tool.orca]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Internal state file (YAML or JSON).
    pub schema: Option<PathBuf>,
    /// Directory the stub is written to.
    pub stub_dir: Option<PathBuf>,
    /// Stub file name inside `stub_dir`.
    pub stub_file: Option<String>,
    /// Custom Tera template replacing the built-in one.
    pub template: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load `[tool.orca]` from a project file. A missing table yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let pyproject: PyProjectToml = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let config = pyproject
            .tool
            .and_then(|t| t.orca)
            .unwrap_or_default();

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base_dir))
    }

    fn relative_to(self, base_dir: &Path) -> Self {
        let resolve = |p: PathBuf| {
            if p.is_relative() {
                base_dir.join(p)
            } else {
                p
            }
        };

        Self {
            schema: self.schema.map(resolve),
            stub_dir: self.stub_dir.map(resolve),
            stub_file: self.stub_file,
            template: self.template.map(resolve),
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub file_name: Option<String>,
    pub template: Option<PathBuf>,
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub schema: PathBuf,
    pub out_dir: PathBuf,
    pub file_name: Option<String>,
    pub template: Option<PathBuf>,
}

impl GenerateSettings {
    /// Merge command-line values over the project file, if any.
    pub fn resolve(overrides: Overrides, project_file: Option<&Path>) -> Result<Self> {
        let project = match project_file {
            Some(path) => ProjectConfig::load(path)?,
            None => ProjectConfig::default(),
        };

        let schema = overrides.schema.or(project.schema).context(
            "No state file given: pass --schema or set `schema` under [tool.orca] in the project file",
        )?;

        Ok(Self {
            schema,
            out_dir: overrides
                .output
                .or(project.stub_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            file_name: overrides.file_name.or(project.stub_file),
            template: overrides.template.or(project.template),
        })
    }
}
