#![allow(dead_code)]

pub const STYLE: &str = r#"main { max-width: 860px; }
.video-container { position: relative; }
"#;

pub const SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', () => {
    if (1 < 2 && "a" !== 'b') { console.log('ready'); }
});
"#;

pub const MINIMAL_DOCUMENT: &str = r#"# Test Document

Some **bold** text.
"#;

pub const FULL_DOCUMENT: &str = r#"# Release notes

![Screenshot](images/screen.png)

@[video](media/demo.mp4)

@[youtube](abc123)

```rust
fn main() {}
```
"#;

pub const DOCUMENT_WITH_MISSING_ASSETS: &str = r#"# Broken

![Gone](gone.png)

@[audio](missing.mp3)
"#;

pub const DOCUMENT_WITH_REMOTE_IMAGE: &str = r#"![Remote](https://example.com/logo.png)
"#;

/// 1x1 transparent GIF
pub const GIF_BYTES: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0xff, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x01, 0x44, 0x00, 0x3b,
];

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";
pub const MP4_BYTES: &[u8] = b"\x00\x00\x00\x18ftypmp42";
pub const ICO_BYTES: &[u8] = &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00];

pub const CONFIG_WITH_CUSTOM_PATHS: &str = r#"input: notes/readme.md
output: dist/readme.mdu
style: theme/site.css
script: theme/site.js
icon: theme/favicon.ico
title: "Readme"
"#;
