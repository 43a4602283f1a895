//! File-backed prompt template source with one-time lazy initialization.
//!
//! The template file is read and parsed at most once per process; the
//! parsed [`PromptTemplate`] is immutable afterwards, so concurrent
//! requests share it without locking.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;

use postforge_core::generator::INPUT_VARIABLES;
use postforge_core::template::{PromptTemplate, TemplateSource};
use postforge_types::error::TemplateError;

/// Loads the content prompt template from disk, once.
pub struct FileTemplateSource {
    path: PathBuf,
    cell: OnceCell<Arc<PromptTemplate>>,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    async fn load(&self) -> Result<Arc<PromptTemplate>, TemplateError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| TemplateError::Io(format!("{}: {err}", self.path.display())))?;

        let template = PromptTemplate::new(&content, &INPUT_VARIABLES)?;
        tracing::debug!(path = %self.path.display(), "content prompt template loaded");

        Ok(Arc::new(template))
    }
}

impl TemplateSource for FileTemplateSource {
    async fn template(&self) -> Result<Arc<PromptTemplate>, TemplateError> {
        self.cell.get_or_try_init(|| self.load()).await.cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TEMPLATE: &str = "Create a {content_type} in a {tone} tone for {platform}. \
         Business: {business_type}. Audience: {target_audience}. \
         Notes: {extra_instructions}.";

    async fn write_template(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("content_prompt.txt");
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn loads_and_parses_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_template(&dir, VALID_TEMPLATE).await;

        let source = FileTemplateSource::new(&path);
        let template = source.template().await.unwrap();
        assert_eq!(template.variables().len(), INPUT_VARIABLES.len());
    }

    #[tokio::test]
    async fn caches_after_first_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_template(&dir, VALID_TEMPLATE).await;

        let source = FileTemplateSource::new(&path);
        let first = source.template().await.unwrap();

        // A rewrite on disk must not be visible through the cache.
        tokio::fs::write(&path, "changed {business_type}").await.unwrap();
        let second = source.template().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = FileTemplateSource::new(dir.path().join("nope.txt"));

        let err = source.template().await.unwrap_err();
        assert!(matches!(err, TemplateError::Io(_)));
    }

    #[tokio::test]
    async fn undeclared_placeholder_fails_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_template(&dir, "Hello {not_a_variable}").await;

        let source = FileTemplateSource::new(&path);
        let err = source.template().await.unwrap_err();
        assert!(matches!(err, TemplateError::UnknownPlaceholder(_)));
    }

    #[tokio::test]
    async fn failed_load_can_retry() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("late.txt");
        let source = FileTemplateSource::new(&path);

        assert!(source.template().await.is_err());

        // OnceCell does not cache failures; a later load succeeds.
        tokio::fs::write(&path, VALID_TEMPLATE).await.unwrap();
        assert!(source.template().await.is_ok());
    }
}
