use crate::ports::{PipelineAssets, WorkdirStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: WorkdirStore, A: PipelineAssets> {
    store: W,
    assets: A,
}

impl<W: WorkdirStore, A: PipelineAssets> AppContext<W, A> {
    /// Create a new application context.
    pub fn new(store: W, assets: A) -> Self {
        Self { store, assets }
    }

    /// Get a reference to the working directory store.
    pub fn store(&self) -> &W {
        &self.store
    }

    /// Get a reference to the pipeline assets.
    pub fn assets(&self) -> &A {
        &self.assets
    }
}
