//! Option groups of the command line.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

use crate::domain::{
    GeneralOptions, PIPELINE_NAME, RunMode, RunOptions, SlurmOptions, SnakemakeOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunModeArg {
    Local,
    Slurm,
}

impl From<RunModeArg> for RunMode {
    fn from(value: RunModeArg) -> Self {
        match value {
            RunModeArg::Local => RunMode::Local,
            RunModeArg::Slurm => RunMode::Slurm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

// The five "default true" switches below keep the historical behaviour:
// passing them is a no-op and there is no way to turn them off.
// TODO: add --no-* counterparts so these can be disabled from the command line.
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Pipeline")]
pub struct PipelineArgs {
    /// Threads given to bcl2fastq
    #[arg(long, default_value_t = RunOptions::DEFAULT_THREADS, allow_negative_numbers = true)]
    pub threads: i64,

    /// Number of mismatches allowed in barcodes
    #[arg(
        long = "barcode-mismatch",
        default_value_t = RunOptions::DEFAULT_MISMATCH,
        allow_negative_numbers = true
    )]
    pub mismatch: i64,

    /// Merge lanes (kept for compatibility, not used by the workflow)
    #[arg(long)]
    pub merge: bool,

    /// Run folder containing the BCL files
    #[arg(long = "bcl-directory")]
    pub bcl_directory: PathBuf,

    /// Where to save the FASTQ results
    #[arg(long = "output-directory", default_value = RunOptions::DEFAULT_OUTPUT_DIRECTORY)]
    pub output_directory: String,

    /// Sample sheet mapping barcodes to samples
    #[arg(long)]
    pub samplesheet: Option<PathBuf>,

    #[arg(long, action = ArgAction::SetTrue, default_value_t = true)]
    pub ignore_missing_controls: bool,

    #[arg(long, action = ArgAction::SetTrue, default_value_t = true)]
    pub ignore_missing_bcls: bool,

    #[arg(long, action = ArgAction::SetTrue, default_value_t = true)]
    pub no_bgzf_compression: bool,

    #[arg(long = "merge_all_lanes", action = ArgAction::SetTrue, default_value_t = true)]
    pub merge_all_lanes: bool,

    #[arg(long, action = ArgAction::SetTrue, default_value_t = true)]
    pub write_fastq_reverse_complement: bool,
}

impl PipelineArgs {
    pub fn into_run_options(self, run_mode: RunMode) -> RunOptions {
        RunOptions {
            run_mode,
            threads: self.threads,
            mismatch: self.mismatch,
            merge: self.merge,
            bcl_directory: self.bcl_directory,
            output_directory: self.output_directory,
            samplesheet: self.samplesheet,
            ignore_missing_controls: self.ignore_missing_controls,
            ignore_missing_bcls: self.ignore_missing_bcls,
            no_bgzf_compression: self.no_bgzf_compression,
            merge_all_lanes: self.merge_all_lanes,
            write_fastq_reverse_complement: self.write_fastq_reverse_complement,
        }
    }
}

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "SLURM")]
pub struct SlurmArgs {
    /// Cores requested per job
    #[arg(long, default_value_t = 4)]
    pub slurm_cores_per_job: u32,

    /// SLURM queue; 'common' lets the scheduler pick
    #[arg(long, default_value = SlurmOptions::DEFAULT_QUEUE)]
    pub slurm_queue: String,

    /// Memory per job in MB
    #[arg(long, default_value_t = 4000)]
    pub slurm_memory: u32,
}

impl From<SlurmArgs> for SlurmOptions {
    fn from(args: SlurmArgs) -> Self {
        Self {
            cores_per_job: args.slurm_cores_per_job,
            queue: args.slurm_queue,
            memory: args.slurm_memory,
        }
    }
}

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Snakemake")]
pub struct SnakemakeArgs {
    /// Maximum number of jobs Snakemake runs at once
    #[arg(long, default_value_t = 40)]
    pub jobs: u32,

    /// Rerun every rule even if outputs are up to date
    #[arg(long)]
    pub forceall: bool,

    /// Keep going with independent jobs when one fails
    #[arg(long)]
    pub keep_going: bool,
}

impl From<SnakemakeArgs> for SnakemakeOptions {
    fn from(args: SnakemakeArgs) -> Self {
        Self { jobs: args.jobs, forceall: args.forceall, keep_going: args.keep_going }
    }
}

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "General")]
pub struct GeneralArgs {
    /// Directory where the pipeline is staged
    #[arg(long, default_value = PIPELINE_NAME)]
    pub working_directory: PathBuf,

    /// Overwrite the content of an existing working directory
    #[arg(long)]
    pub force: bool,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub level: LogLevel,
}

impl From<GeneralArgs> for GeneralOptions {
    fn from(args: GeneralArgs) -> Self {
        Self { working_directory: args.working_directory, force: args.force }
    }
}
