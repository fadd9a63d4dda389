//! [`TestWorkspace`] builder for project generation scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Name of the project root directory created inside the temp dir.
///
/// The index file is named after it, so tests can expect `MyGame.sln`.
pub const ROOT_NAME: &str = "MyGame";

/// A temporary host project root with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use projgen_test_utils::{GraphBuilder, TestWorkspace};
///
/// let ws = TestWorkspace::new();
/// ws.write_graph(&GraphBuilder::new().module("Game", &["Assets/Player.cs"], &[]));
/// ws.assert_file_exists(".projgen/graph.json");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty project root named [`ROOT_NAME`].
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(ROOT_NAME);
        fs::create_dir_all(&root).unwrap();
        Self { temp_dir, root }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The temp dir holding the root, for tests that need a sibling path.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Expected index file name for this root.
    pub fn index_file(&self) -> String {
        format!("{}.sln", ROOT_NAME)
    }

    /// Write `.projgen/graph.json`.
    pub fn write_graph(&self, graph: &GraphBuilder) {
        self.write_file(
            ".projgen/graph.json",
            &serde_json::to_string_pretty(&graph.build()).unwrap(),
        );
    }

    /// Write `.projgen/settings.toml` verbatim.
    pub fn write_settings(&self, toml: &str) {
        self.write_file(".projgen/settings.toml", toml);
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics with the full path if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Parse a JSON file relative to the root.
    pub fn read_json(&self, path: &str) -> Value {
        serde_json::from_str(&self.read_file(path)).unwrap()
    }

    /// Names of the files directly under the root, sorted.
    pub fn root_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.root)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }

    /// Assert that the file at `path` does not contain `content`.
    pub fn assert_file_lacks(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}",
            path,
            content
        );
    }
}

/// Builder for the JSON graph document the host exports.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    packages: Vec<Value>,
    modules: Vec<Value>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a package owning every path under `prefix`.
    pub fn package(mut self, prefix: &str, source: &str) -> Self {
        self.packages.push(json!({ "prefix": prefix, "source": source }));
        self
    }

    /// Add a module whose provenance is inferred from its sources.
    pub fn module(mut self, name: &str, sources: &[&str], references: &[&str]) -> Self {
        self.modules.push(json!({
            "name": name,
            "sources": sources,
            "references": references,
        }));
        self
    }

    /// Add a module with an explicit provenance.
    pub fn module_from(
        mut self,
        name: &str,
        provenance: &str,
        sources: &[&str],
        references: &[&str],
    ) -> Self {
        self.modules.push(json!({
            "name": name,
            "sources": sources,
            "references": references,
            "provenance": provenance,
        }));
        self
    }

    /// Add a compiled reference to the most recently added module.
    pub fn compiled_reference(mut self, path: &str) -> Self {
        if let Some(module) = self.modules.last_mut() {
            let entry = module
                .as_object_mut()
                .unwrap()
                .entry("compiled_references")
                .or_insert_with(|| json!([]));
            entry.as_array_mut().unwrap().push(json!(path));
        }
        self
    }

    pub fn build(&self) -> Value {
        json!({ "packages": self.packages, "modules": self.modules })
    }
}
