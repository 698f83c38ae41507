use std::io;

use thiserror::Error;

/// Library-wide error type for launcher operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure, including path resolution.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `--bcl-directory` was empty.
    #[error("No BCL directory provided. Use --bcl-directory to point at the run folder.")]
    MissingBclDirectory,

    /// Working directory already exists and `--force` was not given.
    #[error("Working directory '{0}' already exists. Use --force to overwrite its content.")]
    WorkdirExists(String),

    /// `teardown` was called before `setup`.
    #[error("Pipeline manager teardown called before setup")]
    SetupNotRun,

    /// An embedded pipeline asset is absent or not UTF-8.
    #[error("Pipeline asset '{0}' not found")]
    AssetMissing(String),

    /// Launch script template failed to register or render.
    #[error("Failed to render template '{name}': {reason}")]
    Template { name: String, reason: String },

    /// Configuration serialization failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// A staged path escapes the working directory.
    #[error("Path '{0}' is outside the working directory")]
    PathOutsideWorkdir(String),
}

impl AppError {
    pub fn serialization<S: Into<String>>(what: S, err: impl std::fmt::Display) -> Self {
        AppError::Serialization { what: what.into(), details: err.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error classes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingBclDirectory
            | AppError::PathOutsideWorkdir(_)
            | AppError::Serialization { .. } => io::ErrorKind::InvalidInput,
            AppError::AssetMissing(_) => io::ErrorKind::NotFound,
            AppError::WorkdirExists(_) => io::ErrorKind::AlreadyExists,
            AppError::SetupNotRun | AppError::Template { .. } => io::ErrorKind::Other,
        }
    }
}
