//! Launching the editor on a workspace root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::installation::Installation;
use crate::profile::Platform;

/// Asset formats the host edits itself; opening them is declined.
pub const REJECTED_EXTENSIONS: &[&str] = &[
    "anim",
    "asset",
    "controller",
    "cubemap",
    "flare",
    "guiskin",
    "lighting",
    "mask",
    "mat",
    "meta",
    "mixer",
    "overridecontroller",
    "physicmaterial",
    "playable",
    "prefab",
    "preset",
    "rendertexture",
    "spriteatlas",
    "terrainlayer",
    "unity",
];

const MACOS_OPEN: &str = "/usr/bin/open";

/// A position to jump to after opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub path: PathBuf,
    pub line: i64,
    pub column: i64,
}

impl LaunchTarget {
    pub fn new(path: impl Into<PathBuf>, line: i64, column: i64) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// The `path:line:column` directive, with line and column floored to 1.
    pub fn directive(&self) -> String {
        format!(
            "{}:{}:{}",
            self.path.display(),
            self.line.max(1),
            self.column.max(1)
        )
    }

    /// Whether the target is an asset format the editor should not open.
    pub fn is_rejected(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                REJECTED_EXTENSIONS
                    .iter()
                    .any(|rejected| rejected.eq_ignore_ascii_case(ext))
            })
    }
}

/// A fully resolved process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    /// Build the invocation opening `root`, optionally jumping to `target`.
    pub fn build(
        installation: &Installation,
        platform: Platform,
        root: &Path,
        target: Option<&LaunchTarget>,
    ) -> Self {
        let mut editor_args: Vec<OsString> = vec![root.as_os_str().to_owned()];
        if let Some(target) = target {
            editor_args.push("-g".into());
            editor_args.push(target.directive().into());
        }

        if platform == Platform::MacOs && installation.is_app_bundle() {
            let mut args: Vec<OsString> = vec![
                "-a".into(),
                installation.path.as_os_str().to_owned(),
                "-n".into(),
                "--args".into(),
            ];
            args.extend(editor_args);
            return Self {
                program: PathBuf::from(MACOS_OPEN),
                args,
            };
        }

        Self {
            program: installation.path.clone(),
            args: editor_args,
        }
    }

    /// Start the process without waiting for it.
    pub fn spawn(&self) -> Result<()> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;
        Ok(())
    }
}

/// Outcome of an open request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenResult {
    Launched,
    /// The target is not something the editor opens
    NotHandled,
    Failed(String),
}

impl OpenResult {
    pub fn is_launched(&self) -> bool {
        matches!(self, OpenResult::Launched)
    }
}

/// Opens workspaces with one installation.
#[derive(Debug, Clone)]
pub struct Launcher {
    installation: Installation,
    platform: Platform,
}

impl Launcher {
    pub fn new(installation: Installation) -> Self {
        Self::for_platform(installation, Platform::current())
    }

    pub fn for_platform(installation: Installation, platform: Platform) -> Self {
        Self {
            installation,
            platform,
        }
    }

    pub fn installation(&self) -> &Installation {
        &self.installation
    }

    /// The invocation [`Launcher::open`] would run, or `None` if declined.
    pub fn command(&self, root: &Path, target: Option<&LaunchTarget>) -> Option<LaunchCommand> {
        if target.is_some_and(LaunchTarget::is_rejected) {
            return None;
        }
        Some(LaunchCommand::build(
            &self.installation,
            self.platform,
            root,
            target,
        ))
    }

    /// Open `root`, jumping to `target` if given.
    ///
    /// Never fails: spawn errors are logged and returned as
    /// [`OpenResult::Failed`].
    pub fn open(&self, root: &Path, target: Option<&LaunchTarget>) -> OpenResult {
        let Some(command) = self.command(root, target) else {
            tracing::debug!(path = ?target.map(|t| &t.path), "declining to open asset");
            return OpenResult::NotHandled;
        };

        tracing::info!(program = %command.program.display(), "launching editor");
        match command.spawn() {
            Ok(()) => OpenResult::Launched,
            Err(e) => {
                tracing::error!(error = %e, "failed to open editor");
                OpenResult::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::EditorProfile;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn install(path: &str) -> Installation {
        Installation::from_path(&EditorProfile::ANTIGRAVITY, path).unwrap()
    }

    fn args(command: &LaunchCommand) -> Vec<String> {
        command
            .args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_root_only() {
        let command = LaunchCommand::build(
            &install("/opt/antigravity/antigravity"),
            Platform::Linux,
            Path::new("/work/MyGame"),
            None,
        );
        assert_eq!(command.program, PathBuf::from("/opt/antigravity/antigravity"));
        assert_eq!(args(&command), vec!["/work/MyGame"]);
    }

    #[test]
    fn test_target_adds_jump_directive() {
        let target = LaunchTarget::new("/work/MyGame/Assets/Player.cs", 12, 4);
        let command = LaunchCommand::build(
            &install("/opt/antigravity/antigravity"),
            Platform::Linux,
            Path::new("/work/MyGame"),
            Some(&target),
        );
        assert_eq!(
            args(&command),
            vec!["/work/MyGame", "-g", "/work/MyGame/Assets/Player.cs:12:4"]
        );
    }

    #[rstest]
    #[case(0, 0, "a.cs:1:1")]
    #[case(-1, 7, "a.cs:1:7")]
    #[case(3, -5, "a.cs:3:1")]
    fn test_directive_floors_to_one(#[case] line: i64, #[case] column: i64, #[case] expected: &str) {
        assert_eq!(LaunchTarget::new("a.cs", line, column).directive(), expected);
    }

    #[test]
    fn test_macos_bundle_goes_through_open() {
        let command = LaunchCommand::build(
            &install("/Applications/Antigravity.app"),
            Platform::MacOs,
            Path::new("/work/MyGame"),
            Some(&LaunchTarget::new("/work/MyGame/a.cs", 2, 3)),
        );
        assert_eq!(command.program, PathBuf::from("/usr/bin/open"));
        assert_eq!(
            args(&command),
            vec![
                "-a",
                "/Applications/Antigravity.app",
                "-n",
                "--args",
                "/work/MyGame",
                "-g",
                "/work/MyGame/a.cs:2:3",
            ]
        );
    }

    #[test]
    fn test_macos_executable_runs_directly() {
        let command = LaunchCommand::build(
            &install("/Applications/Antigravity.app/Contents/MacOS/Antigravity"),
            Platform::MacOs,
            Path::new("/work/MyGame"),
            None,
        );
        assert_eq!(
            command.program,
            PathBuf::from("/Applications/Antigravity.app/Contents/MacOS/Antigravity")
        );
    }

    #[rstest]
    #[case("Assets/Main.unity", true)]
    #[case("Assets/Hero.prefab", true)]
    #[case("Assets/Hero.PREFAB", true)]
    #[case("Assets/Player.cs.meta", true)]
    #[case("Assets/Player.cs", false)]
    #[case("Assets/Water.shader", false)]
    fn test_rejected_assets(#[case] path: &str, #[case] rejected: bool) {
        assert_eq!(LaunchTarget::new(path, 1, 1).is_rejected(), rejected);
    }

    #[test]
    fn test_rejected_target_is_not_handled() {
        let launcher = Launcher::for_platform(install("/nonexistent/antigravity"), Platform::Linux);
        let target = LaunchTarget::new("Assets/Main.unity", 1, 1);

        assert_eq!(
            launcher.open(Path::new("/work/MyGame"), Some(&target)),
            OpenResult::NotHandled
        );
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let launcher = Launcher::for_platform(
            install("/nonexistent/antigravity-12345/antigravity"),
            Platform::Linux,
        );

        match launcher.open(Path::new("/work/MyGame"), None) {
            OpenResult::Failed(message) => assert!(message.contains("antigravity-12345")),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
