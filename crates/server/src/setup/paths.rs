//! Where Claude Desktop keeps its config on each OS.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "claude_desktop_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and other XDG systems.
    Other,
}

impl Platform {
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Every config file the installer should write, most specific first.
///
/// On Windows both the Store (MSIX) install and the classic installer are covered; the Store
/// path is only included if a `Claude_*` package directory exists.
#[must_use]
pub fn config_paths(platform: Platform, var: impl Fn(&str) -> Option<OsString>) -> Vec<PathBuf> {
    let home = var("HOME")
        .or_else(|| var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default();

    match platform {
        Platform::Windows => {
            let mut paths = Vec::new();

            let local = var("LOCALAPPDATA")
                .map_or_else(|| home.join("AppData").join("Local"), PathBuf::from);
            if let Some(package) = find_claude_package(&local.join("Packages")) {
                paths.push(
                    package
                        .join("LocalCache")
                        .join("Roaming")
                        .join("Claude")
                        .join(CONFIG_FILE_NAME),
                );
            }

            let roaming = var("APPDATA")
                .map_or_else(|| home.join("AppData").join("Roaming"), PathBuf::from);
            paths.push(roaming.join("Claude").join(CONFIG_FILE_NAME));
            paths
        }
        Platform::MacOs => vec![
            home.join("Library")
                .join("Application Support")
                .join("Claude")
                .join(CONFIG_FILE_NAME),
        ],
        Platform::Other => {
            let base = var("XDG_CONFIG_HOME")
                .filter(|v| !v.is_empty())
                .map_or_else(|| home.join(".config"), PathBuf::from);
            vec![base.join("Claude").join(CONFIG_FILE_NAME)]
        }
    }
}

fn find_claude_package(packages: &Path) -> Option<PathBuf> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(packages)
        .ok()?
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("Claude_"))
        .map(|e| e.path())
        .collect();
    matches.sort();
    matches.into_iter().next()
}
