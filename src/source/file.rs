//! Local file rule table source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::RuleSource;
use crate::error::LoadError;

/// Source that reads the rule table from a local CSV file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RuleSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tracing::debug!(path = %self.path.display(), "reading rule table");
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/path/rules.csv");
        assert!(matches!(source.fetch().await, Err(LoadError::Io(_))));
    }

    #[test]
    fn describe_is_path() {
        let source = FileSource::new("/tmp/rules.csv");
        assert_eq!(source.describe(), "/tmp/rules.csv");
        assert_eq!(source.path(), Path::new("/tmp/rules.csv"));
    }
}
