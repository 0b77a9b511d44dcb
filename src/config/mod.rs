//! Application configuration.
//!
//! Loaded from a TOML file; command-line flags override individual fields.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
