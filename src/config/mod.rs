mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{
    CONFIG_VERSION, Config, CoverageConfig, DocsConfig, PatternsConfig, ScannerConfig,
    StructureConfig, ThresholdsConfig,
};
pub use validation::validate_config_semantics;
