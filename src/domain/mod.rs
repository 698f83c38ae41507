pub mod cluster_config;
pub mod error;
pub mod launch_command;
pub mod paths;
pub mod pipeline_config;
pub mod run_mode;
pub mod run_options;

pub use cluster_config::ClusterConfig;
pub use error::AppError;
pub use launch_command::{CLUSTER_CONFIG_FILE, LaunchCommand};
pub use paths::normalize_path;
pub use pipeline_config::{Bcl2fastqConfig, PipelineConfig};
pub use run_mode::RunMode;
pub use run_options::{GeneralOptions, LaunchOptions, RunOptions, SlurmOptions, SnakemakeOptions};

/// Pipeline name; also the default working directory.
pub const PIPELINE_NAME: &str = "demultiplex";
/// Directory inside the working directory holding a backup of the config.
pub const SEQUANA_DIR: &str = ".sequana";
/// Configuration file written for the workflow.
pub const CONFIG_FILE: &str = "config.yaml";
/// Schema describing `config.yaml`.
pub const SCHEMA_FILE: &str = "schema.yaml";
