use std::path::PathBuf;

use crate::domain::RunMode;

/// Pipeline options for the demultiplex run.
///
/// `threads` and `mismatch` are signed so that whatever the user typed is
/// carried into the config without clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub run_mode: RunMode,
    pub threads: i64,
    pub mismatch: i64,
    /// Parsed for compatibility; not written to the config.
    pub merge: bool,
    pub bcl_directory: PathBuf,
    pub output_directory: String,
    pub samplesheet: Option<PathBuf>,
    pub ignore_missing_controls: bool,
    pub ignore_missing_bcls: bool,
    pub no_bgzf_compression: bool,
    pub merge_all_lanes: bool,
    pub write_fastq_reverse_complement: bool,
}

impl RunOptions {
    pub const DEFAULT_THREADS: i64 = 4;
    pub const DEFAULT_MISMATCH: i64 = 0;
    pub const DEFAULT_OUTPUT_DIRECTORY: &'static str = "fastq";

    /// Options with every default applied.
    pub fn new(run_mode: RunMode, bcl_directory: impl Into<PathBuf>) -> Self {
        Self {
            run_mode,
            threads: Self::DEFAULT_THREADS,
            mismatch: Self::DEFAULT_MISMATCH,
            merge: false,
            bcl_directory: bcl_directory.into(),
            output_directory: Self::DEFAULT_OUTPUT_DIRECTORY.to_string(),
            samplesheet: None,
            ignore_missing_controls: true,
            ignore_missing_bcls: true,
            no_bgzf_compression: true,
            merge_all_lanes: true,
            write_fastq_reverse_complement: true,
        }
    }
}

/// SLURM submission parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlurmOptions {
    pub cores_per_job: u32,
    pub queue: String,
    /// Memory per job in MB.
    pub memory: u32,
}

impl SlurmOptions {
    /// Queue name meaning "let the scheduler decide".
    pub const DEFAULT_QUEUE: &'static str = "common";

    pub fn uses_default_queue(&self) -> bool {
        self.queue == Self::DEFAULT_QUEUE
    }
}

impl Default for SlurmOptions {
    fn default() -> Self {
        Self { cores_per_job: 4, queue: Self::DEFAULT_QUEUE.to_string(), memory: 4000 }
    }
}

/// Snakemake invocation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakemakeOptions {
    pub jobs: u32,
    pub forceall: bool,
    pub keep_going: bool,
}

impl Default for SnakemakeOptions {
    fn default() -> Self {
        Self { jobs: 40, forceall: false, keep_going: false }
    }
}

/// Working directory handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralOptions {
    pub working_directory: PathBuf,
    pub force: bool,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        Self { working_directory: PathBuf::from(crate::domain::PIPELINE_NAME), force: false }
    }
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub run: RunOptions,
    pub slurm: SlurmOptions,
    pub snakemake: SnakemakeOptions,
    pub general: GeneralOptions,
}

impl LaunchOptions {
    pub fn new(run: RunOptions) -> Self {
        Self {
            run,
            slurm: SlurmOptions::default(),
            snakemake: SnakemakeOptions::default(),
            general: GeneralOptions::default(),
        }
    }
}
