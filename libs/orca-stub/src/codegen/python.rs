// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Python `.pyi` stub rendering through Tera.

use std::collections::HashMap;

use tera::{Context, Tera, Value};

use super::StubRenderer;
use crate::error::Result;
use crate::ident::{sanitise_name, to_identifier_case};
use crate::model::Bundle;

/// File name the Python stub is written to unless overridden.
pub const DEFAULT_STUB_FILE: &str = "orca_stub.pyi";

const TEMPLATE_NAME: &str = "processor.pyi";
const PYTHON_STUB_TEMPLATE: &str = include_str!("../../templates/processor.pyi.tera");

/// Renders a [`Bundle`] as a Python type stub.
///
/// The template can call `to_identifier_case`, `sanitise_name` and
/// `py_docstring` as filters. Schema text placed inside a docstring must go
/// through `py_docstring`.
pub struct PythonStubRenderer {
    tera: Tera,
    file_name: String,
}

impl PythonStubRenderer {
    /// Create a renderer using the built-in processor template.
    pub fn new() -> Result<Self> {
        Self::with_template(PYTHON_STUB_TEMPLATE)
    }

    /// Create a renderer from custom template text.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("to_identifier_case", to_identifier_case_filter);
        tera.register_filter("sanitise_name", sanitise_name_filter);
        tera.register_filter("py_docstring", py_docstring_filter);
        tera.add_raw_template(TEMPLATE_NAME, template)?;

        Ok(Self {
            tera,
            file_name: DEFAULT_STUB_FILE.to_string(),
        })
    }

    /// Write the stub under a different file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

impl StubRenderer for PythonStubRenderer {
    fn render(&self, bundle: &Bundle) -> Result<String> {
        let context = Context::from_serialize(bundle)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn to_identifier_case_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    apply_to_str("to_identifier_case", value, to_identifier_case)
}

fn sanitise_name_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    apply_to_str("sanitise_name", value, sanitise_name)
}

fn py_docstring_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    apply_to_str("py_docstring", value, escape_docstring)
}

/// Escape text for the body of a `"""` docstring.
///
/// Backslashes are doubled. A `"` is escaped when another `"` or the end of
/// the text follows it, so no run of quotes can close the docstring early.
fn escape_docstring(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' if matches!(chars.peek(), Some('"') | None) => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn apply_to_str(filter: &str, value: &Value, f: fn(&str) -> String) -> tera::Result<Value> {
    let s = value.as_str().ok_or_else(|| {
        tera::Error::msg(format!("filter `{filter}` expects a string, got {value}"))
    })?;
    Ok(Value::String(f(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StubError;
    use crate::model::{AlgorithmEntry, MetadataEntry, ProcessorEntry, ReturnCategory, WindowEntry};

    fn metrics_bundle() -> Bundle {
        Bundle {
            processors: vec![ProcessorEntry {
                name: "RollingStats".to_string(),
                metadata: vec![
                    MetadataEntry {
                        var_name: "asset_id_stub".to_string(),
                        key_name: "asset_id".to_string(),
                        description: "Asset the window belongs to".to_string(),
                    },
                    MetadataEntry {
                        var_name: "region_stub".to_string(),
                        key_name: "region".to_string(),
                        description: "Deployment region".to_string(),
                    },
                ],
                windows: vec![WindowEntry {
                    var_name: "tumble_v1_stub".to_string(),
                    name: "tumble".to_string(),
                    version: "v1".to_string(),
                    description: "Fixed five minute window".to_string(),
                    metadata_var_names: vec![
                        "asset_id_stub".to_string(),
                        "region_stub".to_string(),
                    ],
                }],
                algorithms: vec![AlgorithmEntry {
                    name: "mean".to_string(),
                    var_name: "mean_0a1b2c3d".to_string(),
                    processor_name: "RollingStats".to_string(),
                    version: "1.0.0".to_string(),
                    return_type: ReturnCategory::Value,
                    window_var_name: "tumble_v1_stub".to_string(),
                    hash: "0a1b2c3d".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_render_builtin_template() {
        let renderer = PythonStubRenderer::new().unwrap();
        let stub = renderer.render(&metrics_bundle()).unwrap();

        assert!(stub.starts_with("# Generated by orca-stub"));
        assert!(stub.contains("from orca_python import ("));
        assert!(stub.contains("\n\n\nclass rolling_stats:\n"));
        assert!(stub.contains("    asset_id_stub: Final[MetadataField]\n"));
        assert!(stub.contains("    tumble_v1_stub: Final[WindowType]\n"));
        assert!(stub.contains("    Metadata: asset_id_stub, region_stub\n"));
        assert!(stub.contains("    mean_0a1b2c3d: Final[Algorithm[ValueResult]]\n"));
        assert!(stub.contains("    Triggered by: tumble_v1_stub\n"));
        assert!(stub.contains("    Hash: 0a1b2c3d\n"));
        assert!(!stub.contains("    ...\n"));
    }

    #[test]
    fn test_render_empty_processor_has_body() {
        let bundle = Bundle {
            processors: vec![ProcessorEntry {
                name: "1.5Idle".to_string(),
                metadata: vec![],
                windows: vec![],
                algorithms: vec![],
            }],
        };

        let stub = PythonStubRenderer::new().unwrap().render(&bundle).unwrap();

        assert!(stub.contains("class _1_5_idle:\n"));
        assert!(stub.contains("    ...\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = PythonStubRenderer::new().unwrap();
        let bundle = metrics_bundle();

        assert_eq!(
            renderer.render(&bundle).unwrap(),
            renderer.render(&bundle).unwrap()
        );
    }

    #[test]
    fn test_custom_template_and_file_name() {
        let renderer = PythonStubRenderer::with_template(
            "{% for p in processors %}{{ p.name | to_identifier_case }}={{ p.algorithms | length }};{% endfor %}",
        )
        .unwrap()
        .with_file_name("custom.pyi");

        assert_eq!(renderer.file_name(), "custom.pyi");
        assert_eq!(renderer.render(&metrics_bundle()).unwrap(), "rolling_stats=1;");
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(PythonStubRenderer::new().unwrap().file_name(), DEFAULT_STUB_FILE);
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let result = PythonStubRenderer::with_template("{% for p in %}");

        assert!(matches!(result, Err(StubError::Template(_))));
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let renderer = PythonStubRenderer::with_template("{{ 3 | sanitise_name }}").unwrap();

        assert!(matches!(
            renderer.render(&Bundle::default()),
            Err(StubError::Template(_))
        ));
    }

    #[test]
    fn test_descriptions_are_not_html_escaped() {
        let mut bundle = metrics_bundle();
        bundle.processors[0].metadata[0].description = "<ms> & \"raw\" text".to_string();

        let stub = PythonStubRenderer::new().unwrap().render(&bundle).unwrap();

        assert!(stub.contains("<ms> & \"raw\" text\"\"\""));
    }

    #[test]
    fn test_escape_docstring() {
        assert_eq!(escape_docstring("plain text"), "plain text");
        assert_eq!(escape_docstring(r#"say "hi" now"#), r#"say "hi" now"#);
        assert_eq!(escape_docstring(r#"a """ b"#), r#"a \"\"" b"#);
        assert_eq!(escape_docstring(r"C:\data\"), r"C:\\data\\");
        assert_eq!(escape_docstring(r#"ends "quoted""#), r#"ends "quoted\""#);
        assert_eq!(escape_docstring(r#"ends \""#), r#"ends \\\""#);
    }

    #[test]
    fn test_docstring_text_cannot_close_the_docstring() {
        let mut bundle = metrics_bundle();
        let processor = &mut bundle.processors[0];
        processor.metadata[0].description = r#"quoted """ text"#.to_string();
        processor.metadata[1].key_name = r"region\".to_string();
        processor.windows[0].description = r"path C:\data\".to_string();
        processor.windows[0].version = r#"v"1""#.to_string();
        processor.algorithms[0].name = r#"mean""""#.to_string();
        processor.algorithms[0].version = r"1.0\".to_string();

        let stub = PythonStubRenderer::new().unwrap().render(&bundle).unwrap();

        assert!(stub.contains(r#"Metadata field `asset_id`: quoted \"\"" text""""#));
        assert!(stub.contains(r#"Metadata field `region\\`: Deployment region""""#));
        assert!(stub.contains(r#"Window `tumble` version `v"1\"`: path C:\\data\\"#));
        assert!(stub.contains(r#"Algorithm `mean\"\"\"` version `1.0\\` on `RollingStats`."#));
        // One opening and one closing delimiter per docstring: the processor,
        // two metadata fields, one window and one algorithm.
        assert_eq!(stub.matches(r#"""""#).count(), 10);
    }
}
