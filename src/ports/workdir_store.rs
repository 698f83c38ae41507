use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A file written inside the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Path relative to the working directory.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
    /// Mark the file executable (launch scripts).
    pub executable: bool,
}

impl StagedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), executable: false }
    }

    pub fn executable(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), executable: true }
    }
}

/// Port for the pipeline working directory.
///
/// All paths are relative to the working directory and must stay inside it.
pub trait WorkdirStore {
    /// Location of the working directory.
    fn root(&self) -> &Path;

    /// Whether the working directory itself exists.
    fn exists(&self) -> bool;

    /// Create a directory (and parents) inside the working directory.
    /// An empty path creates the working directory itself.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Write a file, creating parent directories as needed.
    fn write_file(&self, file: &StagedFile) -> Result<(), AppError>;

    /// Read a file previously written.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Remove a file if present. Returns whether a file was removed.
    fn remove_file(&self, path: &str) -> Result<bool, AppError>;

    /// Absolute location of a relative path.
    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }
}
