//! Integration tests for JSON file loading

use assert_matches::assert_matches;
use jsonkit::{load_json_file, load_json_file_as, UtilError};
use serde::Deserialize;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[derive(Debug, Deserialize, PartialEq)]
struct ServerConfig {
    host: String,
    port: u16,
}

#[cfg(test)]
mod loader_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_without_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"a":1}"#).unwrap();

        let value = load_json_file(dir.path().join("config")).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_load_with_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert_eq!(load_json_file(&path).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("upper.JSON"), "{}").unwrap();

        let err = load_json_file(dir.path().join("upper.JSON")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(dir.path().join("upper.JSON.json").as_path()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_json_file(dir.path().join("config")).unwrap_err();

        assert_matches!(err, UtilError::Io { .. });
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{\"a\": 1,\n \"b\": }").unwrap();

        let err = load_json_file(dir.path().join("broken")).unwrap_err();
        assert_matches!(&err, UtilError::Parse { source, .. } if source.location.is_some());
        assert!(err.user_message().contains("line 2"));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("latin1.json"), b"{\"a\": \"\xff\"}").unwrap();

        let err = load_json_file(dir.path().join("latin1")).unwrap_err();
        assert_matches!(err, UtilError::Parse { .. });
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_empty_file_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("empty.json"), "").unwrap();

        assert_matches!(
            load_json_file(dir.path().join("empty")),
            Err(UtilError::Parse { .. })
        );
    }

    #[test]
    fn test_every_call_rereads_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("live.json");

        fs::write(&path, r#"{"v": 1}"#).unwrap();
        assert_eq!(load_json_file(&path).unwrap(), json!({"v": 1}));

        fs::write(&path, r#"{"v": 2}"#).unwrap();
        assert_eq!(load_json_file(&path).unwrap(), json!({"v": 2}));
    }

    #[test]
    fn test_load_typed() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("server.json"),
            r#"{"host": "localhost", "port": 8080}"#,
        )
        .unwrap();

        let config: ServerConfig = load_json_file_as(dir.path().join("server")).unwrap();
        assert_eq!(
            config,
            ServerConfig {
                host: "localhost".to_string(),
                port: 8080
            }
        );
    }

    #[test]
    fn test_load_typed_shape_mismatch() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("server.json"), r#"{"host": "localhost"}"#).unwrap();

        let result: Result<ServerConfig, _> = load_json_file_as(dir.path().join("server"));
        assert_matches!(result, Err(UtilError::Deserialize { .. }));
    }
}
