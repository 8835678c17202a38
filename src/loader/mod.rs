//! Synchronous JSON file loading

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ParseError, ParseResult, UtilError, UtilResult};

const JSON_EXTENSION: &str = ".json";

/// Append `.json` to a path unless it already ends with it.
///
/// The suffix match is on the raw path text and is case-sensitive, so
/// `data.JSON` becomes `data.JSON.json`.
pub fn with_json_extension<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();

    if path.as_os_str().to_string_lossy().ends_with(JSON_EXTENSION) {
        return path.to_path_buf();
    }

    let mut extended = OsString::from(path.as_os_str());
    extended.push(JSON_EXTENSION);
    PathBuf::from(extended)
}

/// Read the file at `path` (with `.json` appended if missing) and parse it.
///
/// Every call reads the file again; nothing is cached.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> UtilResult<Value> {
    let path = with_json_extension(path);
    let bytes = read_file(&path)?;

    parse_json(&bytes).map_err(|e| UtilError::parse(Some(path), e))
}

/// Load a JSON file and deserialize it into `T`
pub fn load_json_file_as<T, P>(path: P) -> UtilResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = with_json_extension(path);
    let value = load_json_file(&path)?;

    serde_json::from_value(value).map_err(|e| UtilError::Deserialize {
        path,
        message: e.to_string(),
    })
}

fn read_file(path: &Path) -> UtilResult<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| UtilError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read JSON file");
    Ok(bytes)
}

/// Parse raw bytes as JSON, reporting the failing line and column
pub fn parse_json(bytes: &[u8]) -> ParseResult<Value> {
    serde_json::from_slice(bytes).map_err(|e| {
        let location = error_location(&e);
        // serde_json appends " at line X column Y"; ParseError prints its own location
        let text = e.to_string();
        let message = text.split(" at line ").next().unwrap_or(&text);
        let error = ParseError::new(format!("Invalid JSON: {}", message), location);
        match location.and_then(|loc| error_preview(bytes, loc)) {
            Some(preview) => error.with_preview(preview),
            None => error,
        }
    })
}

/// serde_json reports line 0 for errors not tied to a position
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}

/// Show the offending line with a caret under the failing column.
///
/// serde_json columns are byte offsets, so the caret is placed after the
/// characters that start before that byte.
fn error_preview(bytes: &[u8], (line, col): (usize, usize)) -> Option<String> {
    let content = String::from_utf8_lossy(bytes);
    let error_line = content.lines().nth(line - 1)?;
    let byte_col = col.saturating_sub(1);
    let caret = error_line
        .char_indices()
        .take_while(|(offset, _)| *offset < byte_col)
        .count();

    Some(format!("{}\n{}^", error_line, " ".repeat(caret)))
}
