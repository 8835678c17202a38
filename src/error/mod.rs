//! Error types shared by the helper modules

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Main error type for jsonkit operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON parse error{}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: ParseError,
    },

    #[error("Cannot deserialize {}: {message}", .path.display())]
    Deserialize { path: PathBuf, message: String },

    #[error("Invalid alphabet: {message}")]
    InvalidAlphabet { message: String },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

impl UtilError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: Option<PathBuf>, source: ParseError) -> Self {
        Self::Parse { path, source }
    }

    pub fn invalid_alphabet(message: impl Into<String>) -> Self {
        Self::InvalidAlphabet {
            message: message.into(),
        }
    }

    /// True when the error is an IO failure caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// The file this error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Deserialize { path, .. } => Some(path),
            Self::Parse { path, .. } => path.as_deref(),
            Self::InvalidAlphabet { .. } => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                format!("File not found: {}", path.display())
            }
            Self::Parse { path, source } => {
                let location = match source.location {
                    Some((line, col)) => format!(" at line {}, column {}", line, col),
                    None => String::new(),
                };
                let mut message = format!(
                    "JSON parse error{}{}: {}",
                    display_path(path),
                    location,
                    source.message
                );
                if let Some(preview) = &source.input_preview {
                    message.push('\n');
                    message.push_str(preview);
                }
                message
            }
            _ => self.to_string(),
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for jsonkit operations
pub type UtilResult<T> = Result<T, UtilError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
