//! Working directory setup and teardown for a pipeline launch.

use std::path::PathBuf;

use minijinja::context;

use crate::adapters::assets::render_template;
use crate::domain::{
    AppError, CLUSTER_CONFIG_FILE, CONFIG_FILE, ClusterConfig, LaunchCommand, LaunchOptions,
    PipelineConfig, SEQUANA_DIR,
};
use crate::ports::{PipelineAssets, StagedFile, WorkdirStore};

/// What teardown left in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSummary {
    pub working_directory: PathBuf,
    pub script: PathBuf,
    pub config: PathBuf,
    /// Relative paths of every file written, in write order.
    pub staged: Vec<String>,
}

/// Stages a pipeline into its working directory.
///
/// `setup` prepares the directory and the workflow definition; `teardown`
/// consumes the manager together with the materialized config and writes
/// the launch script, the config and the supporting assets.
pub struct PipelineManager<'a, W: WorkdirStore, A: PipelineAssets> {
    name: String,
    options: LaunchOptions,
    store: &'a W,
    assets: &'a A,
    command: Option<LaunchCommand>,
    staged: Vec<String>,
}

impl<'a, W: WorkdirStore, A: PipelineAssets> PipelineManager<'a, W, A> {
    pub fn new(options: LaunchOptions, name: &str, store: &'a W, assets: &'a A) -> Self {
        Self {
            name: name.to_string(),
            options,
            store,
            assets,
            command: None,
            staged: Vec::new(),
        }
    }

    /// Validate the environment, create the working directory and stage
    /// the workflow definition.
    pub fn setup(&mut self) -> Result<(), AppError> {
        let workdir = self.store.root().display().to_string();

        if self.store.exists() {
            if !self.options.general.force {
                return Err(AppError::WorkdirExists(workdir));
            }
            tracing::warn!("Working directory {} exists; overwriting its content", workdir);
        }

        if self.options.run.run_mode.is_cluster() && !command_on_path("sbatch") {
            tracing::warn!("sbatch not found in PATH; the launch script needs a SLURM host to run");
        }

        tracing::info!("Creating working directory {}", workdir);
        self.store.create_dir_all("")?;
        self.store.create_dir_all(SEQUANA_DIR)?;

        let workflow = self.assets.workflow()?;
        self.stage(StagedFile::new(&workflow.name, workflow.content))?;

        let command = LaunchCommand::begin(
            &workflow.name,
            self.options.run.run_mode,
            &self.options.slurm,
            &self.options.snakemake,
        );
        tracing::debug!("Launch command: {}", command.as_str());
        self.command = Some(command);

        Ok(())
    }

    /// Write the launch script, the config and the supporting assets.
    pub fn teardown(mut self, config: PipelineConfig) -> Result<LaunchSummary, AppError> {
        let command = self.command.take().ok_or(AppError::SetupNotRun)?;
        let command = command.finalize(&self.options.snakemake);

        if !config.input_directory.exists() {
            tracing::warn!(
                "Input directory {} does not exist yet",
                config.input_directory.display()
            );
        }

        let template = self.assets.launch_template()?;
        let script = render_template(
            &template.name,
            &template.content,
            &context! {
                pipeline => &self.name,
                run_mode => self.options.run.run_mode.label(),
                version => env!("CARGO_PKG_VERSION"),
                command => command,
            },
        )?;
        let script_path = format!("{}.sh", self.name);
        self.stage(StagedFile::executable(&script_path, script))?;

        let yaml = config.to_yaml()?;
        self.stage(StagedFile::new(CONFIG_FILE, yaml.clone()))?;
        self.stage(StagedFile::new(format!("{}/{}", SEQUANA_DIR, CONFIG_FILE), yaml))?;

        let schema = self.assets.schema()?;
        self.stage(StagedFile::new(&schema.name, schema.content))?;

        if self.options.run.run_mode.is_cluster() {
            let cluster = ClusterConfig::from_slurm(&self.options.slurm).to_json()?;
            self.stage(StagedFile::new(CLUSTER_CONFIG_FILE, cluster))?;
        } else if self.store.remove_file(CLUSTER_CONFIG_FILE)? {
            tracing::info!("Removed {} left by a previous SLURM staging", CLUSTER_CONFIG_FILE);
        }

        Ok(LaunchSummary {
            working_directory: self.store.root().to_path_buf(),
            script: self.store.resolve_path(&script_path),
            config: self.store.resolve_path(CONFIG_FILE),
            staged: self.staged,
        })
    }

    fn stage(&mut self, file: StagedFile) -> Result<(), AppError> {
        tracing::debug!("Writing {}", file.path);
        self.store.write_file(&file)?;
        self.staged.push(file.path);
        Ok(())
    }
}

fn command_on_path(program: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}
