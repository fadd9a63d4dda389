//! Editor workspace settings (`.vscode/settings.json`).
//!
//! Hides build output, binaries and asset files from the editor's file tree.
//! Only the `files.exclude` key is managed; every other key in an existing
//! document is kept.

use projgen_fs::{NormalizedPath, WorkspacePath, io};
use serde_json::{Map, Value, json};

use crate::Result;
use crate::settings::Settings;

/// Settings key holding the exclusion map.
pub const FILES_EXCLUDE_KEY: &str = "files.exclude";

/// Glob controlled by [`Settings::show_meta_files`].
pub const META_PATTERN: &str = "**/*.meta";

/// Patterns hidden unconditionally.
const EXCLUDE_PATTERNS: &[&str] = &[
    "**/.DS_Store",
    "**/.git",
    "**/.gitignore",
    "**/.gitmodules",
    "**/*.booproj",
    "**/*.pidb",
    "**/*.suo",
    "**/*.user",
    "**/*.userprefs",
    "**/*.unityproj",
    "**/*.dll",
    "**/*.exe",
    "**/*.pdf",
    "**/*.mid",
    "**/*.midi",
    "**/*.wav",
    "**/*.gif",
    "**/*.ico",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.png",
    "**/*.psd",
    "**/*.tga",
    "**/*.tif",
    "**/*.tiff",
    "**/*.3ds",
    "**/*.3DS",
    "**/*.fbx",
    "**/*.FBX",
    "**/*.lxo",
    "**/*.LXO",
    "**/*.ma",
    "**/*.MA",
    "**/*.obj",
    "**/*.OBJ",
    "**/*.asset",
    "**/*.cubemap",
    "**/*.flare",
    "**/*.mat",
    "**/*.prefab",
    "**/*.unity",
    "build/",
    "Build/",
    "Library/",
    "library/",
    "obj/",
    "Obj/",
    "ProjectSettings/",
    "temp/",
    "Temp/",
];

/// The full exclusion map for the given meta-file visibility.
pub fn files_exclude(show_meta_files: bool) -> Map<String, Value> {
    let mut patterns: Map<String, Value> = EXCLUDE_PATTERNS
        .iter()
        .map(|pattern| (pattern.to_string(), Value::Bool(true)))
        .collect();
    patterns.insert(META_PATTERN.to_string(), Value::Bool(!show_meta_files));
    patterns
}

/// Path of the settings document under `root`.
pub fn settings_path(root: &NormalizedPath) -> NormalizedPath {
    root.join(WorkspacePath::EditorSettings.as_str())
}

/// Parse an existing document, or start a fresh one.
///
/// A document that is not a JSON object (including one using comments,
/// which plain JSON rejects) is replaced.
fn parse_existing(path: &NormalizedPath) -> Value {
    if !path.exists() {
        return json!({});
    }
    match io::read_text(path)
        .ok()
        .and_then(|content| serde_json::from_str::<Value>(&content).ok())
    {
        Some(value) if value.is_object() => value,
        _ => {
            tracing::warn!(path = %path, "replacing unreadable editor settings");
            json!({})
        }
    }
}

/// Render the settings document, merging into `existing`.
pub fn render(existing: Value, settings: &Settings) -> Result<String> {
    let mut document = if existing.is_object() { existing } else { json!({}) };
    document[FILES_EXCLUDE_KEY] = Value::Object(files_exclude(settings.show_meta_files));
    let mut content = serde_json::to_string_pretty(&document)?;
    content.push('\n');
    Ok(content)
}

/// Render the document that a sync would write under `root`.
pub fn plan(root: &NormalizedPath, settings: &Settings) -> Result<(NormalizedPath, String)> {
    let path = settings_path(root);
    let content = render(parse_existing(&path), settings)?;
    Ok((path, content))
}

/// Write the settings document under `root`.
pub fn write(root: &NormalizedPath, settings: &Settings) -> Result<NormalizedPath> {
    let (path, content) = plan(root, settings)?;
    io::write_text(&path, &content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read(temp: &TempDir) -> Value {
        let content = fs::read_to_string(temp.path().join(".vscode/settings.json")).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_meta_visible_means_not_excluded() {
        let map = files_exclude(true);
        assert_eq!(map[META_PATTERN], Value::Bool(false));
        assert_eq!(map["Library/"], Value::Bool(true));
        assert_eq!(map.len(), EXCLUDE_PATTERNS.len() + 1);
    }

    #[test]
    fn test_meta_hidden_means_excluded() {
        assert_eq!(files_exclude(false)[META_PATTERN], Value::Bool(true));
    }

    #[test]
    fn test_write_creates_document() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());

        write(&root, &Settings::default().with_meta_files(false)).unwrap();

        let settings = read(&temp);
        assert_eq!(settings[FILES_EXCLUDE_KEY][META_PATTERN], true);
        assert_eq!(settings[FILES_EXCLUDE_KEY]["**/*.dll"], true);
    }

    #[test]
    fn test_write_preserves_other_keys() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".vscode")).unwrap();
        fs::write(
            temp.path().join(".vscode/settings.json"),
            r#"{"editor.fontSize": 14, "files.exclude": {"custom/": true}}"#,
        )
        .unwrap();

        write(&NormalizedPath::new(temp.path()), &Settings::default()).unwrap();

        let settings = read(&temp);
        assert_eq!(settings["editor.fontSize"], 14);
        assert!(settings[FILES_EXCLUDE_KEY]["custom/"].is_null());
        assert_eq!(settings[FILES_EXCLUDE_KEY][META_PATTERN], false);
    }

    #[test]
    fn test_unparseable_document_is_replaced() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".vscode")).unwrap();
        fs::write(temp.path().join(".vscode/settings.json"), "// comment\n{").unwrap();

        write(&NormalizedPath::new(temp.path()), &Settings::default()).unwrap();

        assert!(read(&temp)[FILES_EXCLUDE_KEY].is_object());
    }

    #[test]
    fn test_render_is_stable() {
        let first = render(json!({}), &Settings::default()).unwrap();
        let second = render(serde_json::from_str(&first).unwrap(), &Settings::default()).unwrap();
        assert_eq!(first, second);
    }
}
