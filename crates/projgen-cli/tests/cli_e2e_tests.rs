//! CLI end-to-end tests that invoke the compiled `projgen` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use projgen_test_utils::{GraphBuilder, TestWorkspace};

/// Get a Command for the projgen binary rooted at `ws`.
fn projgen(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_projgen"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PROJGEN_ROOT")
        .arg("--root")
        .arg(ws.root());
    cmd
}

fn game_workspace() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.write_graph(
        &GraphBuilder::new()
            .package("Packages/com.acme.net/", "registry")
            .module("Game", &["Assets/Game.cs"], &["Net"])
            .module("Net", &["Packages/com.acme.net/Client.cs"], &[]),
    );
    ws
}

#[test]
fn test_help_lists_commands() {
    Command::new(env!("CARGO_BIN_EXE_projgen"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync-if-needed"))
        .stdout(predicate::str::contains("installations"));
}

#[test]
fn test_no_command_shows_help_hint() {
    Command::new(env!("CARGO_BIN_EXE_projgen"))
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("projgen --help"));
}

#[test]
fn test_sync_generates_files() {
    let ws = game_workspace();

    projgen(&ws)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Regenerated"))
        .stdout(predicate::str::contains("Game.csproj"));

    ws.assert_file_exists("Game.csproj");
    ws.assert_file_exists("MyGame.sln");
    ws.assert_file_not_exists("Net.csproj");
}

#[test]
fn test_sync_json_report() {
    let ws = game_workspace();

    let output = projgen(&ws).args(["sync", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "regenerated");
    assert_eq!(report["written"].as_array().unwrap().len(), 3);
}

#[test]
fn test_dry_run_writes_nothing() {
    let ws = game_workspace();

    projgen(&ws)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write"));

    ws.assert_file_not_exists("Game.csproj");
}

#[test]
fn test_sync_if_needed_skips_irrelevant_batch() {
    let ws = game_workspace();
    projgen(&ws).arg("sync").assert().success();

    projgen(&ws)
        .args(["sync-if-needed", "-c", "Assets/Foo.meta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));
}

#[test]
fn test_sync_if_needed_regenerates_for_source_change() {
    let ws = game_workspace();
    projgen(&ws).arg("sync").assert().success();

    projgen(&ws)
        .args(["sync-if-needed", "--changed", "Assets/Bar.cs", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"regenerated\""));
}

#[test]
fn test_missing_graph_fails() {
    let ws = TestWorkspace::new();

    projgen(&ws)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_config_set_enables_package_source() {
    let ws = game_workspace();

    projgen(&ws)
        .args(["config", "set", "registry", "true"])
        .assert()
        .success();
    projgen(&ws).arg("sync").assert().success();

    ws.assert_file_exists("Net.csproj");
    ws.assert_file_contains("Game.csproj", "<ProjectReference Include=\"Net.csproj\">");
}

#[test]
fn test_config_show_json() {
    let ws = TestWorkspace::new();

    let output = projgen(&ws)
        .args(["config", "show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["show_meta_files"], true);
    assert_eq!(settings["sources"]["registry"], false);
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let ws = TestWorkspace::new();

    projgen(&ws)
        .args(["config", "set", "npm", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_open_print_shows_jump_directive() {
    let ws = game_workspace();
    let editor = ws.temp_path().join("Antigravity").join("antigravity");

    projgen(&ws)
        .args(["open", "Assets/Game.cs", "--line", "0", "--print", "--editor"])
        .arg(&editor)
        .assert()
        .success()
        .stdout(predicate::str::contains("-g"))
        .stdout(predicate::str::contains("Assets/Game.cs:1:1"));
}

#[test]
fn test_open_print_declines_scene() {
    let ws = game_workspace();
    let editor = ws.temp_path().join("Antigravity").join("antigravity");

    projgen(&ws)
        .args(["open", "Assets/Main.unity", "--print", "--editor"])
        .arg(&editor)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not handled"));
}

#[test]
fn test_open_with_missing_editor_fails() {
    let ws = game_workspace();
    let editor = ws.temp_path().join("Antigravity").join("antigravity");

    projgen(&ws)
        .args(["open", "--editor"])
        .arg(&editor)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch"));

    // Missing project files are generated before launching
    ws.assert_file_exists("MyGame.sln");
}

#[test]
fn test_installations_json() {
    let ws = TestWorkspace::new();

    projgen(&ws)
        .args(["installations", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}
