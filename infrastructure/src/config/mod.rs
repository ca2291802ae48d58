//! Configuration file loading for interview-practice
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTERVIEW_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview.toml` or `./.interview.toml`
//! 4. Global: `$XDG_CONFIG_HOME/interview-practice/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileI18nConfig, FileInterviewConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
