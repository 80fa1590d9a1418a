//! Configuration and output persistence.

pub mod config;
pub mod paths;
pub mod writer;

pub use config::{ConfigFile, ENV_COMPACT, ENV_CONFIG, ENV_OUTPUT, ENV_URL, ResolvedConfig};
pub use paths::AppPaths;
