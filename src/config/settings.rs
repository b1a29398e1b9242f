//! Settings loading for config.toml, with environment overrides
//!
//! Precedence, lowest to highest: built-in defaults, the config file,
//! `URELAY_*` environment variables.

use super::types::{FallbackSettings, ServerSettings, Settings};
use super::types::{DEFAULT_EDITOR, DEFAULT_EMACSCLIENT};
use crate::common::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "unity-relay";

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "URELAY_CONFIG";

/// Overrides `server.program`.
pub const ENV_EMACSCLIENT: &str = "URELAY_EMACSCLIENT";

/// Overrides `fallback.program`.
pub const ENV_EDITOR: &str = "URELAY_EDITOR";

/// Overrides `fallback.shell`.
pub const ENV_SHELL: &str = "URELAY_SHELL";

impl Settings {
    /// Load settings from `<config_dir>/unity-relay/config.toml` (or
    /// `URELAY_CONFIG`) and apply environment overrides.
    ///
    /// Falls back to defaults when the file is missing, unreadable, or
    /// malformed: a stray config problem must never stop the handoff.
    pub fn load() -> Settings {
        let mut settings = load_path(&config_path());
        apply_env_overrides(&mut settings);
        settings
    }
}

/// Resolve the config file location.
fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(ENV_CONFIG) {
        return PathBuf::from(path);
    }
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from a config file, defaulting on any problem.
fn load_path(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("no config file at {}, using defaults", config_path.display());
        return Settings::default();
    }

    match read_config(config_path) {
        Ok(settings) => {
            debug!("loaded settings from {}", config_path.display());
            settings
        }
        Err(err) => {
            warn!("{err}; using defaults");
            Settings::default()
        }
    }
}

fn read_config(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::config(format!("failed to read {}: {}", config_path.display(), e))
    })?;
    toml::from_str(&content).map_err(|e| {
        Error::config(format!("failed to parse {}: {}", config_path.display(), e))
    })
}

/// Environment variables win over the config file.
fn apply_env_overrides(settings: &mut Settings) {
    if let Some(program) = env_path(ENV_EMACSCLIENT) {
        settings.server.program = Some(program);
    }
    if let Some(program) = env_path(ENV_EDITOR) {
        settings.fallback.program = Some(program);
    }
    if let Some(shell) = env_path(ENV_SHELL) {
        settings.fallback.shell = shell;
    }
}

/// An empty value counts as unset, so wrapper scripts can force-clear an
/// inherited override.
fn env_path(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Program Resolution
// ─────────────────────────────────────────────────────────────────────────────

impl ServerSettings {
    /// Effective emacsclient path.
    pub fn resolved_program(&self) -> PathBuf {
        resolve_program(
            self.program.as_deref(),
            "emacsclient",
            Path::new(DEFAULT_EMACSCLIENT),
        )
    }
}

impl FallbackSettings {
    /// Effective generic-editor path.
    pub fn resolved_program(&self) -> PathBuf {
        resolve_program(self.program.as_deref(), "code", Path::new(DEFAULT_EDITOR))
    }
}

/// Resolution order: explicitly configured path (used verbatim, no existence
/// check), the default location if present, then a PATH search, and finally
/// the default location regardless, so a spawn failure names the path that
/// was expected. Candidates that turn out to be the running binary itself
/// are skipped on every branch except the explicit one.
fn resolve_program(explicit: Option<&Path>, name: &str, default: &Path) -> PathBuf {
    if let Some(program) = explicit {
        return program.to_path_buf();
    }

    if default.exists() && !is_self(default) {
        return default.to_path_buf();
    }

    let Ok(candidates) = which::which_all(name) else {
        return default.to_path_buf();
    };
    for found in candidates {
        if is_self(&found) {
            warn!(
                "{} on PATH is this relay binary ({}); ignoring it",
                name,
                found.display()
            );
            continue;
        }
        debug!("found {} on PATH at {}", name, found.display());
        return found;
    }
    default.to_path_buf()
}

/// The relay is typically installed under an editor's name, so a PATH lookup
/// can find the running binary itself. Handing off to ourselves would loop.
fn is_self(candidate: &Path) -> bool {
    let Ok(current) = std::env::current_exe() else {
        return false;
    };
    match (candidate.canonicalize(), current.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => candidate == current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_path_missing_file_is_default() {
        let temp = tempdir().unwrap();
        let settings = load_path(&temp.path().join("config.toml"));

        assert_eq!(settings.server.program, None);
        assert_eq!(settings.server.extra_args, vec!["-n".to_string()]);
    }

    #[test]
    fn test_load_path_custom() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
program = "/usr/bin/emacsclient"

[fallback]
shell = "/bin/zsh"
"#,
        )
        .unwrap();

        let settings = load_path(&config_path);

        assert_eq!(
            settings.server.program,
            Some(PathBuf::from("/usr/bin/emacsclient"))
        );
        assert_eq!(settings.fallback.shell, PathBuf::from("/bin/zsh"));
    }

    #[test]
    fn test_load_path_invalid_toml_is_default() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "not valid toml {{{{").unwrap();

        let settings = load_path(&config_path);
        assert_eq!(settings.server.program, None);
        assert_eq!(settings.fallback.shell, PathBuf::from("/bin/sh"));
    }

    #[test]
    fn test_read_config_reports_parse_failure() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "[server]\nprogram = 17\n").unwrap();

        let err = read_config(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        std::env::set_var(ENV_CONFIG, "/tmp/custom/relay.toml");
        assert_eq!(config_path(), PathBuf::from("/tmp/custom/relay.toml"));
        std::env::remove_var(ENV_CONFIG);
    }

    #[test]
    #[serial]
    fn test_env_overrides_win_over_file_values() {
        std::env::set_var(ENV_EMACSCLIENT, "/env/emacsclient");
        std::env::set_var(ENV_EDITOR, "/env/code");
        std::env::set_var(ENV_SHELL, "/env/sh");

        let mut settings = Settings::default();
        settings.server.program = Some(PathBuf::from("/file/emacsclient"));
        apply_env_overrides(&mut settings);

        assert_eq!(settings.server.program, Some(PathBuf::from("/env/emacsclient")));
        assert_eq!(settings.fallback.program, Some(PathBuf::from("/env/code")));
        assert_eq!(settings.fallback.shell, PathBuf::from("/env/sh"));

        std::env::remove_var(ENV_EMACSCLIENT);
        std::env::remove_var(ENV_EDITOR);
        std::env::remove_var(ENV_SHELL);
    }

    #[test]
    #[serial]
    fn test_empty_env_value_counts_as_unset() {
        std::env::set_var(ENV_SHELL, "");

        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        assert_eq!(settings.fallback.shell, PathBuf::from("/bin/sh"));

        std::env::remove_var(ENV_SHELL);
    }

    #[test]
    fn test_resolve_program_explicit_wins() {
        let resolved = resolve_program(
            Some(Path::new("/explicit/editor")),
            "definitely-not-installed",
            Path::new("/nonexistent/default"),
        );
        assert_eq!(resolved, PathBuf::from("/explicit/editor"));
    }

    #[test]
    fn test_resolve_program_prefers_existing_default() {
        let temp = tempdir().unwrap();
        let default = temp.path().join("fake-editor");
        std::fs::write(&default, "").unwrap();

        let resolved = resolve_program(None, "definitely-not-installed", &default);
        assert_eq!(resolved, default);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_program_falls_back_to_path_search() {
        // `sh` is on PATH everywhere we run.
        let resolved = resolve_program(None, "sh", Path::new("/nonexistent/default/sh"));
        assert_eq!(resolved.file_name().unwrap(), "sh");
        assert_ne!(resolved, PathBuf::from("/nonexistent/default/sh"));
    }

    #[test]
    fn test_resolve_program_unresolvable_keeps_default() {
        let resolved = resolve_program(
            None,
            "urelay-test-binary-that-cannot-exist",
            Path::new("/nonexistent/default"),
        );
        assert_eq!(resolved, PathBuf::from("/nonexistent/default"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_program_skips_default_that_is_this_binary() {
        let temp = tempdir().unwrap();
        let default = temp.path().join("sh");
        std::os::unix::fs::symlink(std::env::current_exe().unwrap(), &default).unwrap();

        // The default location exists but resolves to the running binary;
        // resolution must move on to the PATH search.
        let resolved = resolve_program(None, "sh", &default);

        assert_ne!(resolved, default);
        assert_eq!(resolved.file_name().unwrap(), "sh");
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_resolve_program_path_search_skips_relay_binary() {
        let temp = tempdir().unwrap();
        let decoy_dir = temp.path().join("decoy");
        std::fs::create_dir_all(&decoy_dir).unwrap();
        let decoy = decoy_dir.join("sh");
        std::os::unix::fs::symlink(std::env::current_exe().unwrap(), &decoy).unwrap();

        // Put the decoy first on PATH under the searched name; resolution
        // must keep going to the real one.
        let original_path = std::env::var_os("PATH").unwrap();
        let mut entries = vec![decoy_dir.clone()];
        entries.extend(std::env::split_paths(&original_path));
        std::env::set_var("PATH", std::env::join_paths(entries).unwrap());

        let resolved = resolve_program(None, "sh", Path::new("/nonexistent/default/sh"));

        std::env::set_var("PATH", original_path);

        assert_ne!(resolved, decoy);
        assert_eq!(resolved.file_name().unwrap(), "sh");
    }

    #[test]
    fn test_is_self_detects_current_exe() {
        let current = std::env::current_exe().unwrap();
        assert!(is_self(&current));
        assert!(!is_self(Path::new("/bin/sh")));
    }
}
