//! Config command implementations

use colored::Colorize;

use projgen_core::{Provenance, Settings};
use projgen_fs::NormalizedPath;

use crate::error::{CliError, Result};

const META_FILES_KEYS: &[&str] = &["show-meta-files", "show_meta_files", "meta"];

/// Run the config show command
pub fn run_config_show(root: &NormalizedPath, json: bool) -> Result<()> {
    let settings = Settings::load_or_default(root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("{} Settings for {}", "=>".blue().bold(), root.as_str().cyan());
    println!("   {:<16} {}", "show-meta-files", settings.show_meta_files);
    println!("   {:<16} {}", Provenance::ProjectLocal.as_str(), "always".dimmed());
    for provenance in Provenance::PACKAGED {
        match settings.source(provenance) {
            Some(include) => println!("   {:<16} {}", provenance.as_str(), include),
            None => println!("   {:<16} {}", provenance.as_str(), "unset (excluded)".dimmed()),
        }
    }
    Ok(())
}

/// Run the config set command
pub fn run_config_set(root: &NormalizedPath, key: &str, value: &str) -> Result<()> {
    let value: bool = value
        .parse()
        .map_err(|_| CliError::user(format!("Expected true or false, got '{}'", value)))?;

    let mut settings = Settings::load_or_default(root)?;
    let label = if META_FILES_KEYS.contains(&key) {
        settings.show_meta_files = value;
        "show-meta-files".to_string()
    } else {
        let provenance: Provenance = key.parse().map_err(|_| {
            CliError::user(format!(
                "Unknown setting '{}'. Use show-meta-files or a package source.",
                key
            ))
        })?;
        if !provenance.is_packaged() {
            return Err(CliError::user("Project code is always included."));
        }
        settings.set_source(provenance, value);
        provenance.as_str().to_string()
    };

    settings.save(root)?;
    println!("{} {} = {}", "OK".green().bold(), label, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_source_persists() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());

        run_config_set(&root, "git", "true").unwrap();

        let settings = Settings::load_or_default(&root).unwrap();
        assert_eq!(settings.source(Provenance::VersionControl), Some(true));
        assert_eq!(settings.source(Provenance::Embedded), Some(true));
    }

    #[test]
    fn test_set_meta_visibility() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());

        run_config_set(&root, "show-meta-files", "false").unwrap();

        assert!(!Settings::load_or_default(&root).unwrap().show_meta_files);
    }

    #[test]
    fn test_rejects_bad_input() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());

        assert!(run_config_set(&root, "registry", "maybe").is_err());
        assert!(run_config_set(&root, "npm", "true").is_err());
        assert!(run_config_set(&root, "project-local", "false").is_err());
    }
}
