use crate::types::Page;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tera::{Context as TeraContext, Tera};

/// Built-in document shell. Values are inserted verbatim (autoescape off).
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <link rel="icon" type="image/x-icon" href="{{ icon }}">
    <style>
        {{ css }}
    </style>
</head>
<body>
    <main>
        {{ content }}
    </main>
    <script>
        {{ js }}
    </script>
</body>
</html>
"#;

pub struct Assembler {
    template: String,
    title: String,
    lang: String,
}

impl Assembler {
    pub fn new(title: &str, lang: &str) -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            title: title.to_string(),
            lang: lang.to_string(),
        }
    }

    /// Replace the built-in shell with a tera template read from disk
    pub fn with_template_file(mut self, path: &Path) -> Result<Self> {
        self.template = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        Ok(self)
    }

    pub fn assemble(&self, page: &Page) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("title", &self.title);
        context.insert("lang", &self.lang);
        context.insert("icon", &page.icon);
        context.insert("css", &page.css);
        context.insert("js", &page.js);
        context.insert("content", &page.content);

        Tera::one_off(&self.template, &context, false).context("Failed to render document template")
    }
}
