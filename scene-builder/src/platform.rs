//! Unity editor location per host platform.

use std::path::{Path, PathBuf};

use tracing::debug;

pub const MACOS_EDITOR_PATH: &str =
    "/Applications/Unity/Hub/Editor/6.2.0f1/Unity.app/Contents/MacOS/Unity";
pub const WINDOWS_EDITOR_PATH: &str = "C:/Program Files/Unity/Hub/Editor/6.2.0f1/Editor/Unity.exe";
pub const LINUX_EDITOR_PATH: &str = "/opt/unity/Editor/Unity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// Linux and every other OS.
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Linux,
        }
    }
}

pub fn default_editor_path(platform: Platform) -> &'static Path {
    let raw = match platform {
        Platform::MacOs => MACOS_EDITOR_PATH,
        Platform::Windows => WINDOWS_EDITOR_PATH,
        Platform::Linux => LINUX_EDITOR_PATH,
    };
    Path::new(raw)
}

/// Pick the editor executable: explicit flag, then config file, then the
/// platform default.
pub fn resolve_editor_path(
    flag: Option<&Path>,
    configured: Option<&Path>,
    platform: Platform,
) -> PathBuf {
    let (path, source) = match (flag, configured) {
        (Some(path), _) => (path, "flag"),
        (None, Some(path)) => (path, "config"),
        (None, None) => (default_editor_path(platform), "default"),
    };
    debug!(path = %path.display(), source, "resolved editor path");
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_names_map_to_platforms() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("freebsd"), Platform::Linux);
    }

    #[test]
    fn each_platform_has_its_own_default() {
        assert_eq!(
            default_editor_path(Platform::Linux),
            Path::new("/opt/unity/Editor/Unity")
        );
        assert!(
            default_editor_path(Platform::MacOs)
                .to_string_lossy()
                .ends_with("Unity.app/Contents/MacOS/Unity")
        );
        assert!(
            default_editor_path(Platform::Windows)
                .to_string_lossy()
                .ends_with("Editor/Unity.exe")
        );
    }

    #[test]
    fn flag_beats_config_beats_default() {
        let flag = Path::new("/flag/Unity");
        let configured = Path::new("/config/Unity");

        assert_eq!(
            resolve_editor_path(Some(flag), Some(configured), Platform::Linux),
            flag
        );
        assert_eq!(
            resolve_editor_path(None, Some(configured), Platform::Linux),
            configured
        );
        assert_eq!(
            resolve_editor_path(None, None, Platform::Windows),
            Path::new(WINDOWS_EDITOR_PATH)
        );
    }
}
