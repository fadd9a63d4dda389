//! Discovery of editor installations.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::profile::{EditorProfile, Platform, which};

/// A located editor executable or application bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    pub name: String,
    pub path: PathBuf,
}

impl Installation {
    /// Recognise a user-supplied path as an installation of `profile`.
    ///
    /// Recognition is by name only; the path does not have to exist.
    pub fn from_path(profile: &EditorProfile, path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        profile.matches(&path).then(|| Self {
            name: profile.name.to_string(),
            path,
        })
    }

    /// Like [`Installation::from_path`], failing for unrecognised paths.
    pub fn require(profile: &EditorProfile, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::from_path(profile, path.clone()).ok_or_else(|| Error::UnrecognisedInstallation {
            path,
            editor: profile.name.to_string(),
        })
    }

    /// Whether this is a macOS application bundle rather than an executable.
    pub fn is_app_bundle(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("app"))
    }

    /// Every installation present on this machine.
    pub fn discover(profile: &EditorProfile, platform: Platform) -> Vec<Self> {
        let mut found: Vec<Self> = profile
            .known_paths(platform)
            .into_iter()
            .filter(|path| is_present(path, platform))
            .map(|path| Self {
                name: profile.name.to_string(),
                path,
            })
            .collect();

        if let Some(path) = which(profile.binary)
            && !found.iter().any(|install| install.path == path)
        {
            found.push(Self {
                name: profile.name.to_string(),
                path,
            });
        }

        tracing::debug!(editor = profile.name, count = found.len(), "discovered installations");
        found
    }

    /// The first discovered installation.
    pub fn find(profile: &EditorProfile, platform: Platform) -> Result<Self> {
        Self::discover(profile, platform)
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoInstallation {
                editor: profile.name.to_string(),
            })
    }
}

/// Bundles are directories on macOS; everything else must be a file.
fn is_present(path: &Path, platform: Platform) -> bool {
    path.is_file() || (platform == Platform::MacOs && path.is_dir())
}
