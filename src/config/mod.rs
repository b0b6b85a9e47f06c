mod loader;
mod model;

#[cfg(test)]
pub(crate) mod mock_fs;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, read_file,
};
pub use model::{Config, PolicyConfig, SourcesConfig};
