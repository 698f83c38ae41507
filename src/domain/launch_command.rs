use crate::domain::{RunMode, SlurmOptions, SnakemakeOptions};

/// File name of the cluster resource description used in SLURM mode.
pub const CLUSTER_CONFIG_FILE: &str = "cluster_config.json";

/// Snakemake command line written to the launch script.
///
/// Built in two steps: `begin` during setup, `finalize` during teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    command: String,
}

impl LaunchCommand {
    pub fn begin(
        workflow_file: &str,
        mode: RunMode,
        slurm: &SlurmOptions,
        snakemake: &SnakemakeOptions,
    ) -> Self {
        let mut command =
            format!("snakemake -s {} -p --jobs {} --nolock", workflow_file, snakemake.jobs);

        if mode.is_cluster() {
            let mut sbatch = "sbatch --mem {cluster.memory} -c {cluster.cores}".to_string();
            if !slurm.uses_default_queue() {
                sbatch.push_str(&format!(" -p {}", slurm.queue));
            }
            command.push_str(&format!(
                " --cluster-config {} --cluster \"{}\"",
                CLUSTER_CONFIG_FILE, sbatch
            ));
        }

        Self { command }
    }

    pub fn finalize(mut self, snakemake: &SnakemakeOptions) -> String {
        if snakemake.forceall {
            self.command.push_str(" --forceall");
        }
        if snakemake.keep_going {
            self.command.push_str(" --keep-going");
        }
        self.command
    }

    pub fn as_str(&self) -> &str {
        &self.command
    }
}
