use std::path::PathBuf;

use crate::domain::{RunMode, RunOptions};

/// Builder for `RunOptions` used by unit tests.
#[derive(Debug, Clone)]
pub struct RunOptionsBuilder {
    options: RunOptions,
}

#[allow(dead_code)]
impl RunOptionsBuilder {
    pub fn local(bcl_directory: impl Into<PathBuf>) -> Self {
        Self { options: RunOptions::new(RunMode::Local, bcl_directory) }
    }

    pub fn slurm(bcl_directory: impl Into<PathBuf>) -> Self {
        Self { options: RunOptions::new(RunMode::Slurm, bcl_directory) }
    }

    pub fn threads(mut self, threads: i64) -> Self {
        self.options.threads = threads;
        self
    }

    pub fn mismatch(mut self, mismatch: i64) -> Self {
        self.options.mismatch = mismatch;
        self
    }

    pub fn merge(mut self, merge: bool) -> Self {
        self.options.merge = merge;
        self
    }

    pub fn samplesheet(mut self, samplesheet: impl Into<PathBuf>) -> Self {
        self.options.samplesheet = Some(samplesheet.into());
        self
    }

    pub fn output_directory(mut self, output_directory: impl Into<String>) -> Self {
        self.options.output_directory = output_directory.into();
        self
    }

    pub fn build(self) -> RunOptions {
        self.options
    }
}
