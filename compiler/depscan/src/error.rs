//! Errors that abort a `depscan` run.
//!
//! Malformed module references are not errors: they are diagnostics,
//! reported alongside the results.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", describe_io(.path, .source))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("{0}")]
    Usage(String),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    /// Classify an error from reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::InvalidData {
            CliError::InvalidUtf8 { path }
        } else {
            CliError::Io { path, source }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

fn describe_io(path: &Path, source: &io::Error) -> String {
    let path = path.display();
    match source.kind() {
        io::ErrorKind::NotFound => format!("cannot find '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {source}"),
    }
}
