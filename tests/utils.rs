#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use stencil::cli::Args;
use tempfile::TempDir;

/// A scratch directory holding templates, values files and the output file.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the workspace and returns its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out.txt")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).unwrap()
    }

    /// Arguments that render `templates` into the workspace output file.
    pub fn args(&self, templates: &[PathBuf]) -> Args {
        Args {
            templates: templates.to_vec(),
            output: Some(self.output()),
            values: Vec::new(),
            value_files: Vec::new(),
            append: false,
            verbose: 2,
        }
    }
}
