pub mod pipeline_manager;

pub use pipeline_manager::{LaunchSummary, PipelineManager};
