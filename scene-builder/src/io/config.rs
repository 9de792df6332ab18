//! Per-project configuration stored in `scene-builder.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

/// File name looked up in the project directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "scene-builder.toml";

/// scene-builder configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuilderConfig {
    /// Unity executable to use instead of the platform default.
    /// `--unity-path` still takes precedence.
    pub editor_path: Option<PathBuf>,

    /// Wall-clock budget in seconds for a single editor method.
    pub timeout_secs: u64,

    /// Keep at most this many bytes of editor stdout/stderr per stream.
    pub output_limit_bytes: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            editor_path: None,
            timeout_secs: 2 * 60 * 60,
            output_limit_bytes: 100_000,
        }
    }
}

impl BuilderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be > 0"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        if let Some(path) = &self.editor_path
            && path.as_os_str().is_empty()
        {
            return Err(anyhow!("editor_path must not be empty"));
        }
        Ok(())
    }
}

/// Default config location for a project directory.
pub fn default_config_path(project: &Path) -> PathBuf {
    project.join(CONFIG_FILE_NAME)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `BuilderConfig::default()`.
pub fn load_config(path: &Path) -> Result<BuilderConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BuilderConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BuilderConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, BuilderConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = default_config_path(temp.path());
        fs::write(&path, "editor_path = \"/custom/Unity\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.editor_path, Some(PathBuf::from("/custom/Unity")));
        assert_eq!(cfg.timeout_secs, BuilderConfig::default().timeout_secs);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("cfg.toml");
        fs::write(&path, "timeout_secs = 0\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("timeout_secs must be > 0"));
    }

    #[test]
    fn unknown_syntax_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("cfg.toml");
        fs::write(&path, "timeout_secs = \"soon\"\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
