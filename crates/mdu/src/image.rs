use crate::encoder::{encode_file, resolve_local_path};
use crate::types::Rewritten;
use regex::{Captures, Regex};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Inlines local `![alt](path)` images as data URIs.
///
/// Remote (`http://`, `https://`) and already inlined (`data:`) targets are
/// skipped. Only the single-line form is recognised; titles and reference
/// style images are left for the Markdown renderer.
pub struct ImageLinkRewriter {
    base_dir: PathBuf,
}

impl ImageLinkRewriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn rewrite(&self, content: &str) -> Rewritten {
        static IMAGE_RE: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE_RE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

        let mut missing = Vec::new();

        let text = re
            .replace_all(content, |cap: &Captures| {
                let alt = &cap[1];
                let src = &cap[2];

                if is_external(src) {
                    return cap[0].to_string();
                }

                let path = resolve_local_path(&self.base_dir, src);
                match encode_file(&path) {
                    Some(asset) => format!("![{}]({})", alt, asset),
                    None => {
                        missing.push(path);
                        cap[0].to_string()
                    }
                }
            })
            .into_owned();

        Rewritten { text, missing }
    }
}

fn is_external(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
}
