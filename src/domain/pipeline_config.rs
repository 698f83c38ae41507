//! Demultiplex pipeline configuration (`config.yaml`) and its materialization
//! from run options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, RunOptions, normalize_path};

/// On-disk configuration consumed by the demultiplex workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Absolute path to the BCL run folder.
    pub input_directory: PathBuf,
    pub bcl2fastq: Bcl2fastqConfig,
}

/// Options handed to bcl2fastq by the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bcl2fastqConfig {
    pub threads: i64,
    pub barcode_mismatch: i64,
    pub sample_sheet_file: Option<PathBuf>,
    pub output_directory: String,
    pub ignore_missing_controls: bool,
    pub ignore_missing_bcls: bool,
    pub no_bgzf_compression: bool,
    pub merge_all_lanes: bool,
    pub write_fastq_reverse_complement: bool,
}

impl PipelineConfig {
    /// Build the config for a run.
    ///
    /// `bcl_directory` is made absolute against the current directory, with
    /// `.` and `..` folded and any trailing separator dropped; every other
    /// field is copied as-is. The path is resolved lexically, so the
    /// directory does not need to exist yet.
    pub fn materialize(options: &RunOptions) -> Result<Self, AppError> {
        if options.bcl_directory.as_os_str().is_empty() {
            return Err(AppError::MissingBclDirectory);
        }
        let input_directory = normalize_path(&std::path::absolute(&options.bcl_directory)?);

        Ok(Self {
            input_directory,
            bcl2fastq: Bcl2fastqConfig {
                threads: options.threads,
                barcode_mismatch: options.mismatch,
                sample_sheet_file: options.samplesheet.clone(),
                output_directory: options.output_directory.clone(),
                ignore_missing_controls: options.ignore_missing_controls,
                ignore_missing_bcls: options.ignore_missing_bcls,
                no_bgzf_compression: options.no_bgzf_compression,
                merge_all_lanes: options.merge_all_lanes,
                write_fastq_reverse_complement: options.write_fastq_reverse_complement,
            },
        })
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::serialization("config.yaml", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::serialization("config.yaml", e))
    }
}
