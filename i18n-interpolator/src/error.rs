use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while interpolating a document.
///
/// Any of these aborts the whole `interpolate` call. Lookup misses during
/// placeholder substitution are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolateError {
    /// A marker with a variables argument that never reaches its closing `)}`
    #[error("unterminated i18n call for key '{key}' at byte {offset}")]
    UnterminatedCall { key: String, offset: usize },
    /// The variables argument is not valid JSON5
    #[error("invalid variables for key '{key}': {message}")]
    InvalidVariables { key: String, message: String },
    /// Document or marker nesting went deeper than the configured limit
    #[error("interpolation nested deeper than {limit} levels")]
    RecursionLimit { limit: usize },
}

/// Why a placeholder path could not be resolved against its variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid array index: {0}")]
    IndexNotInteger(String),
    #[error("value is not an array: {0}")]
    NotASequence(String),
    #[error("array index out of range: {index} (length {len})")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("value is not an object at '{0}'")]
    NotAMapping(String),
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Errors raised while loading a catalog from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("invalid messages in '{}': root must be an object", .0.display())]
    NotAnObject(PathBuf),
}

/// Result type for interpolation
pub type InterpolateResult<T> = Result<T, InterpolateError>;
