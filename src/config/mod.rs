//! Global configuration management for mtree
//!
//! This module provides the user configuration stored in
//! ~/.mtree/config.toml. Command-line flags override anything set here.

pub mod global_config;

// Re-export commonly used items
pub use global_config::{ConfigKey, ConfigValue, GlobalConfig};
