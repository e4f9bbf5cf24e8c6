pub mod fixtures;

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use fixtures::{MINIMAL_DOCUMENT, SCRIPT, STYLE};

/// A project laid out with the default paths
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestEnvironment {
    pub fn minimal() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();

        let env = Self { temp_dir, root };
        env.setup_minimal();
        env
    }

    pub fn with_document(document: &str) -> Self {
        let env = Self::minimal();
        env.write_file("convert_markdown/document.md", document);
        env
    }

    fn setup_minimal(&self) {
        self.write_file("src/style.css", STYLE);
        self.write_file("src/script.js", SCRIPT);
        self.write_file("convert_markdown/document.md", MINIMAL_DOCUMENT);
    }

    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full_path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, path: &str) {
        fs::remove_file(self.root.join(path)).expect("Failed to remove file");
    }

    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path)).expect("Failed to read file")
    }

    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        fs::read(self.root.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    pub fn run(&self, args: &[&str]) -> std::process::Output {
        Command::cargo_bin("mdu")
            .expect("Failed to find mdu binary")
            .current_dir(&self.root)
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute mdu")
    }

    pub fn run_build(&self) -> std::process::Output {
        self.run(&["build"])
    }

    pub fn output_exists(&self) -> bool {
        self.file_exists("document.mdu")
    }

    pub fn read_output(&self) -> String {
        self.read_file("document.mdu")
    }
}

pub fn assert_success(output: &std::process::Output) {
    if !output.status.success() {
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        panic!("Command failed with status: {:?}", output.status);
    }
}

pub fn assert_failure(output: &std::process::Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

pub fn stdout_contains(output: &std::process::Output, text: &str) -> bool {
    String::from_utf8_lossy(&output.stdout).contains(text)
}

pub fn stderr_contains(output: &std::process::Output, text: &str) -> bool {
    String::from_utf8_lossy(&output.stderr).contains(text)
}
