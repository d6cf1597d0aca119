// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Internal state loading.

use crate::definition::InternalState;
use crate::error::{Result, StubError};
use std::path::Path;

/// Parse internal state from a YAML string.
pub fn parse_state_yaml(yaml: &str) -> Result<InternalState> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse internal state from a JSON string.
pub fn parse_state_json(json: &str) -> Result<InternalState> {
    Ok(serde_json::from_str(json)?)
}

/// Parse internal state from a file.
///
/// Files ending in `.json` are read as JSON, everything else as YAML.
pub fn parse_state_file(path: &Path) -> Result<InternalState> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StubError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            StubError::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_state_json(&text)
    } else {
        parse_state_yaml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ResultType;

    const STATE_YAML: &str = r#"
processors:
  - name: metrics
    runtime: python3.12
    connection_str: localhost:5377
    supported_algorithms:
      - name: mean
        version: 1.0.0
        result_type: VALUE
        window_type:
          name: tumble
          version: v1
          description: Fixed five minute window
          metadata_fields:
            - name: asset_id
              description: Asset the window belongs to
"#;

    #[test]
    fn test_parse_yaml() {
        let state = parse_state_yaml(STATE_YAML).unwrap();

        assert_eq!(state.processors.len(), 1);
        let processor = &state.processors[0];
        assert_eq!(processor.name, "metrics");
        assert_eq!(processor.connection_str, "localhost:5377");

        let algorithm = &processor.supported_algorithms[0];
        assert_eq!(algorithm.result_type, ResultType::Value);
        assert_eq!(algorithm.window_type.name, "tumble");
        assert_eq!(algorithm.window_type.metadata_fields[0].name, "asset_id");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "processors": [{
                "name": "metrics",
                "supported_algorithms": [{ "name": "max", "result_type": "STRUCT" }]
            }]
        }"#;

        let state = parse_state_json(json).unwrap();
        let algorithm = &state.processors[0].supported_algorithms[0];

        assert_eq!(algorithm.name, "max");
        assert_eq!(algorithm.result_type, ResultType::Struct);
        assert_eq!(state.processors[0].runtime, "");
    }

    #[test]
    fn test_parse_rejects_unknown_result_type() {
        let yaml = r#"
processors:
  - name: metrics
    supported_algorithms:
      - name: mean
        result_type: SCALAR
"#;

        assert!(matches!(
            parse_state_yaml(yaml),
            Err(StubError::YamlParse(_))
        ));
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_state_file(Path::new("/nonexistent/state.yaml"));

        assert!(matches!(result, Err(StubError::FileNotFound { .. })));
    }

    #[test]
    fn test_parse_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("state.yaml");
        let json_path = dir.path().join("state.JSON");
        std::fs::write(&yaml_path, STATE_YAML).unwrap();
        std::fs::write(&json_path, r#"{"processors": [{"name": "metrics"}]}"#).unwrap();

        assert_eq!(parse_state_file(&yaml_path).unwrap().processors.len(), 1);
        assert_eq!(
            parse_state_file(&json_path).unwrap().processors[0].name,
            "metrics"
        );
    }
}
