//! Configuration for the relay
//!
//! Supports:
//! - `<config_dir>/unity-relay/config.toml` - downstream program settings
//! - `URELAY_*` environment variables - per-invocation overrides

pub mod settings;
pub mod types;

pub use settings::{ENV_CONFIG, ENV_EDITOR, ENV_EMACSCLIENT, ENV_SHELL};
pub use types::*;
