//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{EmbeddedPipelineAssets, FilesystemWorkdirStore};
use crate::app::{AppContext, commands::launch};

pub use crate::domain::{
    AppError, Bcl2fastqConfig, GeneralOptions, LaunchOptions, PipelineConfig, RunMode, RunOptions,
    SlurmOptions, SnakemakeOptions,
};
pub use crate::services::LaunchSummary;

/// Create an `AppContext` for the working directory of a launch.
fn create_context(
    base: &Path,
    options: &LaunchOptions,
) -> AppContext<FilesystemWorkdirStore, EmbeddedPipelineAssets> {
    let store = FilesystemWorkdirStore::under(base, &options.general.working_directory);
    AppContext::new(store, EmbeddedPipelineAssets::new())
}

/// Stage the pipeline with the working directory resolved against the current directory.
pub fn launch(options: LaunchOptions) -> Result<LaunchSummary, AppError> {
    launch_at(std::env::current_dir()?, options)
}

/// Stage the pipeline with the working directory resolved against `base`.
///
/// A relative `--bcl-directory` is still resolved against the process's
/// current directory, as a shell user would expect.
pub fn launch_at(
    base: impl Into<PathBuf>,
    options: LaunchOptions,
) -> Result<LaunchSummary, AppError> {
    let base = base.into();
    let ctx = create_context(&base, &options);
    launch::execute(&ctx, options)
}

/// Build the pipeline config without touching the filesystem.
pub fn materialize(options: &RunOptions) -> Result<PipelineConfig, AppError> {
    PipelineConfig::materialize(options)
}
