use std::path::PathBuf;

/// Output of a rewrite pass over document text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    /// Referenced assets that could not be read; their syntax was left as written
    pub missing: Vec<PathBuf>,
}

/// Everything the document template needs
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub content: String,
    pub css: String,
    pub js: String,
    /// Data URI of the favicon, empty when unavailable
    pub icon: String,
}

/// Summary of a bundling run
#[derive(Debug, Clone)]
pub struct BundleReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub missing: Vec<PathBuf>,
}
