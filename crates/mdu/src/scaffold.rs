use crate::config::MduConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STYLE: &str = include_str!("../assets/style.css");
const DEFAULT_SCRIPT: &str = include_str!("../assets/script.js");
const STARTER_DOCUMENT: &str = include_str!("../assets/document.md");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created(PathBuf),
    Skipped(PathBuf),
}

/// Write the default stylesheet, script and a starter document to the
/// configured paths. Existing files are kept unless `force` is set.
pub fn scaffold(config: &MduConfig, force: bool) -> Result<Vec<ScaffoldOutcome>> {
    let files = [
        (config.style.as_path(), DEFAULT_STYLE),
        (config.script.as_path(), DEFAULT_SCRIPT),
        (config.input.as_path(), STARTER_DOCUMENT),
    ];

    files
        .into_iter()
        .map(|(path, content)| write_file(path, content, force))
        .collect()
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<ScaffoldOutcome> {
    if path.exists() && !force {
        return Ok(ScaffoldOutcome::Skipped(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(ScaffoldOutcome::Created(path.to_path_buf()))
}
