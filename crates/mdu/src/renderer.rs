use crate::syntax_highlighter::SyntaxHighlighter;
use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser as MdParser, Tag};
use tracing::debug;

struct FencedBlock {
    lang: String,
    code: String,
}

/// Markdown to HTML. Raw HTML already in the text (media embeds) is passed
/// through as-is; fenced code blocks with a language are highlighted.
pub struct Renderer {
    highlighter: Option<SyntaxHighlighter>,
}

impl Renderer {
    pub fn new(highlight: bool) -> Self {
        Self {
            highlighter: highlight.then(SyntaxHighlighter::new),
        }
    }

    pub fn render(&self, markdown: &str) -> String {
        let options = Options::all();
        let parser = MdParser::new_ext(markdown, options);

        let mut events = Vec::new();
        let mut block: Option<FencedBlock> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                    if self.highlighter.is_some() =>
                {
                    let lang = info.split_whitespace().next().unwrap_or("").to_string();
                    if lang.is_empty() {
                        events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))));
                    } else {
                        block = Some(FencedBlock {
                            lang,
                            code: String::new(),
                        });
                    }
                }
                Event::Text(text) if block.is_some() => {
                    if let Some(b) = block.as_mut() {
                        b.code.push_str(&text);
                    }
                }
                Event::End(Tag::CodeBlock(_)) if block.is_some() => {
                    if let Some(b) = block.take() {
                        events.push(Event::Html(self.render_code_block(&b).into()));
                    }
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        html_output
    }

    fn render_code_block(&self, block: &FencedBlock) -> String {
        if let Some(highlighter) = &self.highlighter {
            match highlighter.highlight(&block.code, &block.lang) {
                Ok(html) => return html,
                Err(e) => debug!("Highlighting failed for '{}': {}", block.lang, e),
            }
        }

        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            escape_html(&block.lang),
            escape_html(&block.code)
        )
    }
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
