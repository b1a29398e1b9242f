//! Configuration types for the relay
//!
//! Defines:
//! - `Settings` - the full config.toml schema
//! - `ServerSettings` - editor-server (emacsclient) section
//! - `FallbackSettings` - generic-editor (shell + editor) section

use serde::Deserialize;
use std::path::PathBuf;

/// Default emacsclient location when nothing is configured.
pub const DEFAULT_EMACSCLIENT: &str = "/usr/local/bin/emacsclient";

/// Default generic editor location when nothing is configured.
pub const DEFAULT_EDITOR: &str = "/usr/local/bin/code";

/// Default shell used to launch the generic editor.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub fallback: FallbackSettings,
}

/// Editor-server settings: how to reach the running Emacs server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Path to the emacsclient binary. Omitted = default location, then PATH.
    #[serde(default)]
    pub program: Option<PathBuf>,

    /// Arguments inserted between the `+LINE` argument and the file path.
    #[serde(default = "default_server_extra_args")]
    pub extra_args: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            program: None,
            extra_args: default_server_extra_args(),
        }
    }
}

/// `-n`: tell the server not to wait for the file to be edited.
fn default_server_extra_args() -> Vec<String> {
    vec!["-n".to_string()]
}

/// Generic-editor settings: the shell-launched fallback
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    /// Shell used to launch the editor (editor entry points are often
    /// launcher scripts).
    #[serde(default = "default_shell")]
    pub shell: PathBuf,

    /// Path to the editor binary. Omitted = default location, then PATH.
    #[serde(default)]
    pub program: Option<PathBuf>,

    /// Arguments inserted before the forwarded invocation,
    /// e.g. `["--reuse-window"]`.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            program: None,
            extra_args: Vec::new(),
        }
    }
}

fn default_shell() -> PathBuf {
    PathBuf::from(DEFAULT_SHELL)
}
