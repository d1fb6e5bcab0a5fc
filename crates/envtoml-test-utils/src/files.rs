use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Parse TOML text, panicking on invalid fixtures.
pub fn parse_table(contents: &str) -> toml::Table {
    contents.parse().expect("fixture is valid toml")
}

/// Write a document to `dir/name`, creating parent directories if needed.
pub fn write_document(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(&path, contents).expect("write");
    path
}

/// Temporary directory holding fixture documents; removed on drop.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tmp"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_document(self, name: &str, contents: &str) -> Self {
        write_document(self.dir.path(), name, contents);
        self
    }

    pub fn document(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}
