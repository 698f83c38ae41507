mod pipeline_assets;
mod workdir_store;

pub use pipeline_assets::{AssetFile, PipelineAssets};
pub use workdir_store::{StagedFile, WorkdirStore};
