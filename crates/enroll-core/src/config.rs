use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{CatalogError, InMemoryCatalog};

/// Catalog file looked up inside the data directory when none is given
pub const DEFAULT_COURSES_FILE: &str = "courses.json";

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    /// Explicit catalog file; overrides `data_dir/courses.json`
    pub courses_file: Option<PathBuf>,
    /// Artificial latency for account creation, so the busy state is visible
    pub register_delay: Duration,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            courses_file: None,
            register_delay: Duration::ZERO,
        }
    }

    pub fn with_courses_file(mut self, path: Option<PathBuf>) -> Self {
        self.courses_file = path;
        self
    }

    pub fn with_register_delay(mut self, delay: Duration) -> Self {
        self.register_delay = delay;
        self
    }

    /// Catalog file to load, if one exists
    pub fn courses_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.courses_file {
            return Some(path.clone());
        }
        let candidate = self.data_dir.join(DEFAULT_COURSES_FILE);
        candidate.is_file().then_some(candidate)
    }

    /// Load the configured catalog, falling back to the bundled sample courses
    pub fn load_catalog(&self) -> Result<InMemoryCatalog, CatalogError> {
        match self.courses_path() {
            Some(path) => InMemoryCatalog::load(&path),
            None => {
                tracing::info!("no catalog file found, using sample courses");
                Ok(InMemoryCatalog::default())
            }
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|dir| dir.join("enroll"))
            .unwrap_or_else(|| PathBuf::from("enroll_data"));
        Self::new(data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_sample_courses() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::new(dir.path());
        assert!(config.courses_path().is_none());
        assert!(!config.load_catalog().unwrap().courses().is_empty());
    }

    #[test]
    fn test_picks_up_catalog_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_COURSES_FILE), "[]").unwrap();

        let config = CoreConfig::new(dir.path());
        assert_eq!(
            config.courses_path(),
            Some(dir.path().join(DEFAULT_COURSES_FILE))
        );
        assert!(config.load_catalog().unwrap().courses().is_empty());
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("other.json");
        let config = CoreConfig::new(dir.path()).with_courses_file(Some(explicit.clone()));
        assert_eq!(config.courses_path(), Some(explicit));
        assert!(matches!(config.load_catalog(), Err(CatalogError::Io(_))));
    }
}
