// Common test utilities for store integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that provides a temporary backing file path
pub struct StoreTestFixture {
    #[allow(dead_code)]
    pub temp_dir: TempDir,
    pub file: PathBuf,
}

impl StoreTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = temp_dir.path().join("db.json");
        Self { temp_dir, file }
    }

    #[allow(dead_code)]
    pub fn file_contents(&self) -> String {
        std::fs::read_to_string(&self.file).expect("Failed to read backing file")
    }
}

impl Default for StoreTestFixture {
    fn default() -> Self {
        Self::new()
    }
}
