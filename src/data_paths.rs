use std::path::{Path, PathBuf};

/// Default data directory (relative to current working directory)
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Holdings file name within the data directory
pub const HOLDINGS_FILE: &str = "holdings.json";

/// Logs subdirectory within the data directory
pub const LOGS_DIR: &str = "logs";

/// Helper struct to manage data paths
#[derive(Clone, Debug)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the holdings file path (the single persisted storage slot)
    pub fn holdings_file(&self) -> PathBuf {
        self.root.join(HOLDINGS_FILE)
    }

    /// Get the logs directory
    pub fn logs(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.logs())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_in_data_dir() {
        let paths = DataPaths::new("/tmp/stockfolio-test");
        assert_eq!(
            paths.holdings_file(),
            PathBuf::from("/tmp/stockfolio-test/holdings.json")
        );
        assert_eq!(paths.logs(), PathBuf::from("/tmp/stockfolio-test/logs"));
    }
}
