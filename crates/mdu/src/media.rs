use crate::encoder::{encode_file, resolve_local_path};
use crate::types::Rewritten;
use regex::{Captures, Regex};
use std::path::PathBuf;
use std::sync::OnceLock;

const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed/";
const VIMEO_EMBED_URL: &str = "https://player.vimeo.com/video/";

/// Kinds accepted inside `@[kind](source)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
    YouTube,
    Vimeo,
}

impl MediaKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "youtube" => Some(Self::YouTube),
            "vimeo" => Some(Self::Vimeo),
            _ => None,
        }
    }
}

/// Replaces `@[audio](path)`, `@[video](path)`, `@[youtube](id)` and
/// `@[vimeo](id)` tags with literal HTML.
///
/// Must run before image links are rewritten and before Markdown rendering.
pub struct MediaTagRewriter {
    base_dir: PathBuf,
}

impl MediaTagRewriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn rewrite(&self, content: &str) -> Rewritten {
        static MEDIA_RE: OnceLock<Regex> = OnceLock::new();
        let re = MEDIA_RE
            .get_or_init(|| Regex::new(r"@\[(audio|video|youtube|vimeo)\]\((.*?)\)").unwrap());

        let mut missing = Vec::new();

        let text = re
            .replace_all(content, |cap: &Captures| {
                let original = cap[0].to_string();
                let Some(kind) = MediaKind::parse(&cap[1]) else {
                    return original;
                };
                let source = &cap[2];

                match kind {
                    MediaKind::Audio | MediaKind::Video => {
                        match self.embed_local(kind, source) {
                            Some(html) => html,
                            None => {
                                missing.push(resolve_local_path(&self.base_dir, source));
                                original
                            }
                        }
                    }
                    MediaKind::YouTube => youtube_embed(source),
                    MediaKind::Vimeo => vimeo_embed(source),
                }
            })
            .into_owned();

        Rewritten { text, missing }
    }

    fn embed_local(&self, kind: MediaKind, source: &str) -> Option<String> {
        let path = resolve_local_path(&self.base_dir, source);
        let data_uri = encode_file(&path)?.to_string();

        let html = match kind {
            MediaKind::Audio => format!(
                r#"<audio controls src="{}">Your browser does not support the audio element.</audio>"#,
                data_uri
            ),
            _ => format!(
                r#"<video controls width="100%" src="{}">Your browser does not support the video element.</video>"#,
                data_uri
            ),
        };

        Some(html)
    }
}

fn youtube_embed(id: &str) -> String {
    format!(
        r#"<div class="video-container">
<iframe src="{}{}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>
</div>

"#,
        YOUTUBE_EMBED_URL, id
    )
}

fn vimeo_embed(id: &str) -> String {
    format!(
        r#"<div class="video-container">
<iframe src="{}{}" frameborder="0" allow="autoplay; fullscreen; picture-in-picture" allowfullscreen></iframe>
</div>

"#,
        VIMEO_EMBED_URL, id
    )
}
