//! Configuration file loading for localchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./localchat.toml` or `./.localchat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/localchat/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileReplConfig, FileServiceConfig};
pub use loader::ConfigLoader;
