pub mod assets;
pub mod memory_workdir_store;
pub mod workdir_filesystem;

pub use assets::EmbeddedPipelineAssets;
pub use memory_workdir_store::MemoryWorkdirStore;
pub use workdir_filesystem::FilesystemWorkdirStore;
