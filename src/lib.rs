//! sequana-demultiplex: stage the demultiplex Snakemake pipeline into a
//! working directory with its configuration and launch script.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, Bcl2fastqConfig, GeneralOptions, LaunchOptions, LaunchSummary, PipelineConfig,
    RunMode, RunOptions, SlurmOptions, SnakemakeOptions, launch, launch_at, materialize,
};
