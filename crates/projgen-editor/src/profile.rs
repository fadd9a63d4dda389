//! Editor identity and install locations.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Operating system family, which decides install locations and launch style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}

/// A supported external editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorProfile {
    /// Display name, also used to recognise user-supplied install paths
    pub name: &'static str,
    /// Executable name on PATH
    pub binary: &'static str,
}

impl EditorProfile {
    pub const ANTIGRAVITY: EditorProfile = EditorProfile {
        name: "Antigravity",
        binary: "antigravity",
    };

    /// Install locations probed on `platform`, most specific first.
    ///
    /// Windows checks the per-user and machine-wide program folders; macOS
    /// checks both the application bundle and the executable inside it.
    pub fn known_paths(&self, platform: Platform) -> Vec<PathBuf> {
        let executable = format!("{}.exe", self.name);
        match platform {
            Platform::Windows => {
                let mut paths = Vec::new();
                if let Some(local) = dirs::data_local_dir() {
                    paths.push(local.join("Programs").join(self.name).join(&executable));
                }
                if let Some(program_files) = std::env::var_os("ProgramFiles") {
                    paths.push(PathBuf::from(program_files).join(self.name).join(&executable));
                }
                paths
            }
            Platform::MacOs => {
                let bundle = PathBuf::from("/Applications").join(format!("{}.app", self.name));
                let inner = bundle.join("Contents").join("MacOS").join(self.name);
                vec![bundle, inner]
            }
            Platform::Linux => {
                let mut paths = Vec::new();
                if let Some(home) = dirs::home_dir() {
                    paths.push(home.join(".local").join("bin").join(self.binary));
                }
                paths.push(PathBuf::from("/usr/bin").join(self.binary));
                paths
            }
        }
    }

    /// Whether `path` names an installation of this editor.
    pub fn matches(&self, path: &Path) -> bool {
        path.to_string_lossy()
            .to_lowercase()
            .contains(&self.name.to_lowercase())
    }
}

/// Find the full path of a binary on PATH.
pub fn which(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let exts = if cfg!(windows) {
        vec![".exe", ".cmd", ".bat", ""]
    } else {
        vec![""]
    };

    for dir in std::env::split_paths(&path_var) {
        for ext in &exts {
            let candidate = dir.join(format!("{}{}", binary, ext));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
