/// Where the staged pipeline is meant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Local,
    Slurm,
}

impl RunMode {
    pub fn label(self) -> &'static str {
        match self {
            RunMode::Local => "local",
            RunMode::Slurm => "slurm",
        }
    }

    pub fn is_cluster(self) -> bool {
        matches!(self, RunMode::Slurm)
    }
}
