//! CLI Adapter.

mod options;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::domain::{AppError, LaunchOptions};
use crate::services::LaunchSummary;

pub use options::{GeneralArgs, LogLevel, PipelineArgs, RunModeArg, SlurmArgs, SnakemakeArgs};

const LONG_ABOUT: &str = "\
Prepare the sequana demultiplex pipeline: copy the Snakemake workflow and its
configuration file into a working directory together with an executable
launch script.

For a local run:

    sequana_pipelines_demultiplex --bcl-directory PATH_TO_DATA --run-mode local

For a run on a SLURM cluster:

    sequana_pipelines_demultiplex --bcl-directory PATH_TO_DATA --run-mode slurm";

#[derive(Debug, Parser)]
#[command(name = "sequana_pipelines_demultiplex")]
#[command(version)]
#[command(about = "Stage the sequana demultiplex pipeline", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Use 'local' to run on this machine, 'slurm' to submit jobs to a SLURM cluster
    #[arg(long = "run-mode", value_enum)]
    pub run_mode: RunModeArg,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub slurm: SlurmArgs,

    #[command(flatten)]
    pub snakemake: SnakemakeArgs,

    #[command(flatten)]
    pub general: GeneralArgs,
}

impl Cli {
    pub fn into_options(self) -> LaunchOptions {
        LaunchOptions {
            run: self.pipeline.into_run_options(self.run_mode.into()),
            slurm: self.slurm.into(),
            snakemake: self.snakemake.into(),
            general: self.general.into(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.general.level);

    let result: Result<LaunchSummary, AppError> = crate::app::api::launch(cli.into_options());

    match result {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.filter().into()))
        .init();
}

fn print_summary(summary: &LaunchSummary) {
    println!("✅ Staged demultiplex pipeline in {}/", summary.working_directory.display());
    println!(
        "  Check the launch script {} and the configuration {}",
        summary.script.display(),
        summary.config.display()
    );
    println!(
        "  Once ready: cd {} && sh {}",
        summary.working_directory.display(),
        summary.script.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
    );
}
