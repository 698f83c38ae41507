mod template_engine;

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, PIPELINE_NAME, SCHEMA_FILE};
use crate::ports::{AssetFile, PipelineAssets};

pub use self::template_engine::render_template;

static PIPELINE_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/demultiplex");

/// Pipeline assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPipelineAssets;

impl EmbeddedPipelineAssets {
    pub fn new() -> Self {
        Self
    }

    fn load(&self, name: &str) -> Result<AssetFile, AppError> {
        let content = PIPELINE_ASSET_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::AssetMissing(name.to_string()))?;
        Ok(AssetFile { name: name.to_string(), content: content.to_string() })
    }
}

impl PipelineAssets for EmbeddedPipelineAssets {
    fn workflow(&self) -> Result<AssetFile, AppError> {
        self.load(&format!("{}.rules", PIPELINE_NAME))
    }

    fn schema(&self) -> Result<AssetFile, AppError> {
        self.load(SCHEMA_FILE)
    }

    fn launch_template(&self) -> Result<AssetFile, AppError> {
        self.load(&format!("{}.sh.j2", PIPELINE_NAME))
    }
}
