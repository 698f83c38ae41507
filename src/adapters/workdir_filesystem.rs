use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, normalize_path};
use crate::ports::{StagedFile, WorkdirStore};

/// Filesystem-backed working directory.
#[derive(Debug, Clone)]
pub struct FilesystemWorkdirStore {
    root: PathBuf,
}

impl FilesystemWorkdirStore {
    /// Create a store for the given working directory. Nothing is created yet.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve `working_directory` against `base` (absolute values win).
    pub fn under(base: &Path, working_directory: &Path) -> Self {
        Self::new(base.join(working_directory))
    }

    fn checked_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(path);
        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if Path::new(path).is_absolute() || !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathOutsideWorkdir(path.to_string()));
        }

        Ok(full_path)
    }
}

impl WorkdirStore for FilesystemWorkdirStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        self.root.exists()
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir_all(full_path)?;
        Ok(())
    }

    fn write_file(&self, file: &StagedFile) -> Result<(), AppError> {
        let full_path = self.checked_path(&file.path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, &file.content)?;

        // Make executable (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if file.executable {
                let mut perms = fs::metadata(&full_path)?.permissions();
                perms.set_mode(0o755);
                fs::set_permissions(&full_path, perms)?;
            }
        }

        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.checked_path(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn remove_file(&self, path: &str) -> Result<bool, AppError> {
        let full_path = self.checked_path(path)?;
        if !full_path.is_file() {
            return Ok(false);
        }
        fs::remove_file(full_path)?;
        Ok(true)
    }
}
