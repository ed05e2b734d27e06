use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use weblog_core::conf::WeblogConfig;
use weblog_core::store::Store;

/// Scratch directory holding a database and any log files a test writes.
pub struct TestWorkspace {
    dir: TempDir,
    pub config: WeblogConfig,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut config = WeblogConfig::default();
        config.storage.path = dir.path().join("weblogs.db");

        Self { dir, config }
    }

    pub fn write_log(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write log file");
        path
    }

    pub fn open_store(&self) -> Store {
        Store::open(&self.config.storage.path).expect("failed to open store")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
