use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "mdu.yaml";

/// Bundler configuration from mdu.yaml. Relative paths resolve against the
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MduConfig {
    /// Markdown source; referenced assets resolve against its directory
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_style")]
    pub style: PathBuf,
    #[serde(default = "default_script")]
    pub script: PathBuf,
    /// Favicon; a missing file only produces a warning
    #[serde(default = "default_icon")]
    pub icon: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Custom tera template replacing the built-in document shell
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Highlight fenced code blocks (default: true)
    #[serde(default = "default_highlight")]
    pub highlight: bool,
}

impl MduConfig {
    /// Directory that asset references in the document are relative to
    pub fn base_dir(&self) -> &Path {
        self.input.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl Default for MduConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            style: default_style(),
            script: default_script(),
            icon: default_icon(),
            title: default_title(),
            lang: default_lang(),
            template: None,
            highlight: default_highlight(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("convert_markdown/document.md")
}

fn default_output() -> PathBuf {
    PathBuf::from("document.mdu")
}

fn default_style() -> PathBuf {
    PathBuf::from("src/style.css")
}

fn default_script() -> PathBuf {
    PathBuf::from("src/script.js")
}

fn default_icon() -> PathBuf {
    PathBuf::from("docs/mdu_icon.ico")
}

fn default_title() -> String {
    "MDU Document".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_highlight() -> bool {
    true
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `mdu.yaml` is used when present
/// and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<MduConfig> {
    let (config_path, required) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if !config_path.exists() {
        if required {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }
        return Ok(MduConfig::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    // An empty file deserializes to unit, not a mapping
    if content.trim().is_empty() {
        return Ok(MduConfig::default());
    }

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}
