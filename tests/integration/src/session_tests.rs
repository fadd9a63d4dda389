//! End-to-end tests across the vertical slice
//!
//! These follow a host editor session: the graph changes between change
//! batches, settings are toggled, and the editor is pointed at the result.

use std::path::Path;

use pretty_assertions::assert_eq;
use projgen_core::{
    ManifestGraph, ModuleId, Provenance, Settings, SyncEngine, SyncOutcome, SyncReport,
};
use projgen_editor::{EditorProfile, Installation, LaunchTarget, Launcher, Platform};
use projgen_fs::NormalizedPath;
use projgen_test_utils::{GraphBuilder, TestWorkspace};

const NONE: [&str; 0] = [];

/// The host's view of the workspace: graph and settings re-read per batch.
struct Session<'a> {
    ws: &'a TestWorkspace,
    root: NormalizedPath,
}

impl<'a> Session<'a> {
    fn new(ws: &'a TestWorkspace) -> Self {
        Self {
            ws,
            root: NormalizedPath::new(ws.root()),
        }
    }

    fn engine(&self) -> SyncEngine {
        let settings = Settings::load_or_default(&self.root).unwrap();
        SyncEngine::new(self.root.clone(), ManifestGraph::for_root(&self.root), settings)
    }

    fn changed(&self, changed: &[&str]) -> SyncReport {
        self.engine().sync_if_needed(changed, NONE)
    }

    fn reimported(&self, reimported: &[&str]) -> SyncReport {
        self.engine().sync_if_needed(NONE, reimported)
    }

    fn toggle(&self, provenance: Provenance, include: bool) {
        let mut settings = Settings::load_or_default(&self.root).unwrap();
        settings.set_source(provenance, include);
        settings.save(&self.root).unwrap();
        assert!(self.ws.root().join(".projgen/settings.toml").exists());
    }
}

fn base_graph() -> GraphBuilder {
    GraphBuilder::new()
        .package("Packages/com.acme.net/", "registry")
        .package("Packages/com.studio.tools/", "embedded")
        .module("Game", &["Assets/Scripts/Player.cs"], &["Tools", "Net"])
        .module("Tools", &["Packages/com.studio.tools/Runtime/Tool.cs"], &[])
        .module("Net", &["Packages/com.acme.net/Runtime/Client.cs"], &[])
}

#[test]
fn host_session_tracks_graph_changes() {
    let ws = TestWorkspace::new();
    let session = Session::new(&ws);
    ws.write_graph(&base_graph());

    // First batch always generates
    let report = session.changed(&[]);
    assert_eq!(report.outcome, SyncOutcome::Regenerated);
    assert_eq!(ws.root_files(), vec!["Game.csproj", "MyGame.sln", "Tools.csproj"]);
    ws.assert_file_contains("Game.csproj", "<ProjectReference Include=\"Tools.csproj\">");
    ws.assert_file_lacks("Game.csproj", "Net.csproj");

    // A new module appears with a new script
    ws.write_graph(&base_graph().module("Editor", &["Assets/Editor/Menu.cs"], &["Game"]));
    let report = session.changed(&["Assets/Editor/Menu.cs.meta"]);
    assert_eq!(report.outcome, SyncOutcome::Skipped);
    ws.assert_file_not_exists("Editor.csproj");

    let report = session.changed(&["Assets/Editor/Menu.cs", "Assets/Editor/Menu.cs.meta"]);
    assert_eq!(report.outcome, SyncOutcome::Regenerated);
    ws.assert_file_exists("Editor.csproj");
    ws.assert_file_contains(&ws.index_file(), "\"Editor\", \"Editor.csproj\"");

    // Enabling registry packages takes effect on the next relevant batch
    session.toggle(Provenance::Registry, true);
    let report = session.reimported(&["Assets/Plugins/Native.dll"]);
    assert_eq!(report.outcome, SyncOutcome::Regenerated);
    ws.assert_file_exists("Net.csproj");
    ws.assert_file_contains("Game.csproj", "<ProjectReference Include=\"Net.csproj\">");
}

#[test]
fn index_and_descriptors_agree() {
    let ws = TestWorkspace::new();
    ws.write_graph(&base_graph());
    Session::new(&ws).changed(&[]);

    let index = ws.read_file(&ws.index_file());
    for name in ["Game", "Tools"] {
        let guid = ModuleId::derive(name).braced();
        ws.assert_file_contains(
            &format!("{}.csproj", name),
            &format!("<ProjectGuid>{}</ProjectGuid>", guid),
        );
        assert!(index.contains(&format!("\"{}\", \"{}.csproj\", \"{}\"", name, name, guid)));
        assert!(index.contains(&format!("\t\t{}.Release|Any CPU.Build.0 = Release|Any CPU\r\n", guid)));
    }

    // Registration order follows the graph, not the alphabet
    let game = index.find("\"Game\"").unwrap();
    let tools = index.find("\"Tools\"").unwrap();
    assert!(game < tools);
}

#[test]
fn regenerated_output_is_stable_across_engines() {
    let first = TestWorkspace::new();
    let second = TestWorkspace::new();
    first.write_graph(&base_graph());
    second.write_graph(&base_graph());

    Session::new(&first).engine().sync_always();
    Session::new(&second).engine().sync_always();

    for file in ["Game.csproj", "Tools.csproj", "MyGame.sln", ".vscode/settings.json"] {
        assert_eq!(first.read_file(file), second.read_file(file), "{} differs", file);
    }
}

#[test]
fn editor_opens_generated_workspace() {
    let ws = TestWorkspace::new();
    ws.write_graph(&base_graph());
    Session::new(&ws).changed(&[]);

    let installation = Installation::require(
        &EditorProfile::ANTIGRAVITY,
        "/Applications/Antigravity.app",
    )
    .unwrap();
    let launcher = Launcher::for_platform(installation, Platform::MacOs);
    let target = LaunchTarget::new(ws.root().join("Assets/Scripts/Player.cs"), 42, 0);

    let command = launcher.command(ws.root(), Some(&target)).unwrap();
    let args: Vec<String> = command
        .args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    assert_eq!(command.program, Path::new("/usr/bin/open"));
    assert_eq!(&args[..4], &["-a", "/Applications/Antigravity.app", "-n", "--args"]);
    assert_eq!(args[4], ws.root().to_string_lossy());
    assert!(args[6].ends_with("Player.cs:42:1"));

    let scene = LaunchTarget::new(ws.root().join("Assets/Scenes/Main.unity"), 1, 1);
    assert!(launcher.command(ws.root(), Some(&scene)).is_none());
}
