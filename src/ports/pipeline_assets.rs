use crate::domain::AppError;

/// An asset shipped with the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// File name as staged in the working directory.
    pub name: String,
    pub content: String,
}

/// Port for the pipeline's bundled assets.
pub trait PipelineAssets {
    /// The Snakemake workflow definition (`<pipeline>.rules`).
    fn workflow(&self) -> Result<AssetFile, AppError>;

    /// Schema describing `config.yaml`.
    fn schema(&self) -> Result<AssetFile, AppError>;

    /// Jinja template of the launch script.
    fn launch_template(&self) -> Result<AssetFile, AppError>;
}
