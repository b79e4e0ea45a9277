use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonlError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read {path}: {source}")]
    InFile {
        path: PathBuf,
        source: Box<JsonlError>,
    },
    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },
    #[error("json parse error at line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("invalid record at line {line}: {reason}")]
    Record { line: usize, reason: String },
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

impl JsonlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JsonlError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn record(line: usize, reason: impl Into<String>) -> Self {
        JsonlError::Record {
            line,
            reason: reason.into(),
        }
    }

    pub fn in_file(path: impl Into<PathBuf>, source: JsonlError) -> Self {
        JsonlError::InFile {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            JsonlError::Read { line, .. }
            | JsonlError::Json { line, .. }
            | JsonlError::Record { line, .. } => Some(*line),
            JsonlError::InFile { source, .. } => source.line(),
            JsonlError::Io { .. } | JsonlError::Write(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonlError>;
