//! Launch command: materialize the config and stage the working directory.

use crate::app::AppContext;
use crate::domain::{AppError, LaunchOptions, PIPELINE_NAME, PipelineConfig};
use crate::ports::{PipelineAssets, WorkdirStore};
use crate::services::{LaunchSummary, PipelineManager};

/// Execute the launch command.
///
/// The config is materialized before the manager touches the working
/// directory, so a bad `--bcl-directory` leaves nothing behind.
pub fn execute<W: WorkdirStore, A: PipelineAssets>(
    ctx: &AppContext<W, A>,
    options: LaunchOptions,
) -> Result<LaunchSummary, AppError> {
    let config = PipelineConfig::materialize(&options.run)?;
    tracing::debug!("Materialized config for {}", config.input_directory.display());

    let mut manager = PipelineManager::new(options, PIPELINE_NAME, ctx.store(), ctx.assets());
    manager.setup()?;
    manager.teardown(config)
}
