//! Well-known locations inside a generated workspace.

use std::path::Path;

/// Paths projgen reads from or writes to, relative to the workspace root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspacePath {
    /// Persisted generation settings
    SettingsFile,
    /// Module graph exported by the host build system
    GraphFile,
    /// Editor workspace settings document
    EditorSettings,
}

impl WorkspacePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SettingsFile => ".projgen/settings.toml",
            Self::GraphFile => ".projgen/graph.json",
            Self::EditorSettings => ".vscode/settings.json",
        }
    }
}

impl AsRef<Path> for WorkspacePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for WorkspacePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
