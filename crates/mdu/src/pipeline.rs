use crate::assembler::Assembler;
use crate::config::MduConfig;
use crate::encoder::encode_file;
use crate::image::ImageLinkRewriter;
use crate::media::MediaTagRewriter;
use crate::renderer::Renderer;
use crate::types::{BundleReport, Page};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runs the whole conversion: media tags → image links → Markdown → document.
pub struct Bundler {
    config: MduConfig,
    renderer: Renderer,
    assembler: Assembler,
}

impl Bundler {
    pub fn new(config: MduConfig) -> Result<Self> {
        let renderer = Renderer::new(config.highlight);
        let mut assembler = Assembler::new(&config.title, &config.lang);
        if let Some(template) = &config.template {
            assembler = assembler.with_template_file(template)?;
        }

        Ok(Self {
            config,
            renderer,
            assembler,
        })
    }

    /// Build the document in memory without touching the output path
    pub fn render(&self) -> Result<(String, Vec<PathBuf>)> {
        // Required sources are all read before any work is done
        let css = read_required(&self.config.style)?;
        let js = read_required(&self.config.script)?;
        let markdown = read_required(&self.config.input)?;

        let base_dir = self.config.base_dir();
        debug!("Resolving assets relative to '{}'", base_dir.display());

        let media = MediaTagRewriter::new(base_dir).rewrite(&markdown);
        let images = ImageLinkRewriter::new(base_dir).rewrite(&media.text);

        let mut missing = media.missing;
        missing.extend(images.missing);

        let content = self.renderer.render(&images.text);

        // The icon is optional, an unreadable one leaves the favicon href empty
        let icon = match encode_file(&self.config.icon) {
            Some(asset) => asset.to_string(),
            None => {
                missing.push(self.config.icon.clone());
                String::new()
            }
        };

        let page = Page {
            content,
            css,
            js,
            icon,
        };

        Ok((self.assembler.assemble(&page)?, missing))
    }

    /// Build the document and write it to the configured output path
    pub fn bundle(&self) -> Result<BundleReport> {
        let (html, missing) = self.render()?;
        let output = &self.config.output;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(output, &html)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        Ok(BundleReport {
            output: output.clone(),
            bytes: html.len(),
            missing,
        })
    }
}

fn read_required(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("A source file is missing: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
