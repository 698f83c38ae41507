use serde::Serialize;

use crate::domain::{AppError, SlurmOptions};

/// Snakemake cluster resource file (`cluster_config.json`).
///
/// Keys under `__default__` are what the `{cluster.*}` placeholders of the
/// launch command refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterConfig {
    #[serde(rename = "__default__")]
    pub default: ClusterResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterResources {
    pub memory: u32,
    pub cores: u32,
    pub queue: String,
}

impl ClusterConfig {
    pub fn from_slurm(slurm: &SlurmOptions) -> Self {
        Self {
            default: ClusterResources {
                memory: slurm.memory,
                cores: slurm.cores_per_job,
                queue: slurm.queue.clone(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::serialization("cluster_config.json", e))?;
        json.push('\n');
        Ok(json)
    }
}
