use projgen_fs::{Error, NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join(".vscode/settings.json");

    io::write_atomic(&path, b"{}").unwrap();

    assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "{}");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("Game.sln");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("Game.csproj");

    io::write_text(&path, "<Project />").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Game.csproj".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_into_readonly_dir_fails_cleanly() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions, nothing to assert there
    if fs::write(locked.join("probe"), "x").is_ok() {
        return;
    }

    let result = io::write_text(&NormalizedPath::new(locked.join("A.csproj")), "x");
    assert!(matches!(result, Err(Error::Io { .. })));
    assert_eq!(fs::read_dir(&locked).unwrap().count(), 0);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_read_text_nonexistent_file() {
    let result = io::read_text(&NormalizedPath::new("/nonexistent/projgen/file.txt"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_write_text_roundtrips_through_read_text() {
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    let temp = assert_fs::TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("MyGame.sln");

    io::write_text(&path, "Global\r\nEndGlobal\r\n").unwrap();

    temp.child("MyGame.sln")
        .assert(predicate::str::contains("\r\nEndGlobal"));
    assert_eq!(io::read_text(&path).unwrap(), "Global\r\nEndGlobal\r\n");
}
