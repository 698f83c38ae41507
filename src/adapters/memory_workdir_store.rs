use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{StagedFile, WorkdirStore};

/// In-memory working directory for testing.
#[derive(Debug, Clone)]
pub struct MemoryWorkdirStore {
    root: PathBuf,
    // Arc<Mutex> so clones observe the same files
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    dirs: Vec<String>,
    files: BTreeMap<String, StagedFile>,
}

impl MemoryWorkdirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), state: Arc::new(Mutex::new(MemoryState::default())) }
    }

    /// A store whose working directory already exists.
    pub fn existing(root: impl Into<PathBuf>) -> Self {
        let store = Self::new(root);
        store.lock().dirs.push(String::new());
        store
    }

    /// Snapshot of a staged file.
    pub fn file(&self, path: &str) -> Option<StagedFile> {
        self.lock().files.get(path).cloned()
    }

    /// Relative paths of all staged files, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.lock().files.keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WorkdirStore for MemoryWorkdirStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        let state = self.lock();
        state.dirs.iter().any(String::is_empty) || !state.files.is_empty()
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let mut state = self.lock();
        if !state.dirs.iter().any(|d| d == path) {
            state.dirs.push(path.to_string());
        }
        if !path.is_empty() && !state.dirs.iter().any(String::is_empty) {
            state.dirs.push(String::new());
        }
        Ok(())
    }

    fn write_file(&self, file: &StagedFile) -> Result<(), AppError> {
        if Path::new(&file.path).is_absolute() || file.path.split('/').any(|part| part == "..") {
            return Err(AppError::PathOutsideWorkdir(file.path.clone()));
        }
        self.lock().files.insert(file.path.clone(), file.clone());
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.lock().files.get(path).map(|f| f.content.clone()).ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path),
            ))
        })
    }

    fn remove_file(&self, path: &str) -> Result<bool, AppError> {
        Ok(self.lock().files.remove(path).is_some())
    }
}
