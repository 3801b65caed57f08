//! hugo-yml-corrector: normalizes the YAML front-matter of Hugo content files
//!
//! Every markdown file in a content tree gets its front-matter parsed,
//! cleaned (null keys dropped, SEO keys grouped under `metadata`, image paths
//! made root-relative) and written back, leaving the document body untouched.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;

use std::path::{Path, PathBuf};

pub use error::{CorrectorError, Result};

/// The main corrector application
#[derive(Debug, Clone)]
pub struct Corrector {
    /// Corrector configuration
    pub config: config::CorrectorConfig,
    /// Directory whose content files are corrected
    pub target_dir: PathBuf,
}

impl Corrector {
    /// Create a corrector for a directory, loading its `.yml-corrector.yml`
    pub fn new<P: AsRef<Path>>(target_dir: P) -> Result<Self> {
        Self::with_config_file(target_dir, None)
    }

    /// Create a corrector, reading configuration from `config_path` if given
    pub fn with_config_file<P: AsRef<Path>>(
        target_dir: P,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let target_dir = target_dir.as_ref().to_path_buf();

        if !target_dir.exists() {
            return Err(CorrectorError::NotFound(target_dir));
        }
        if !target_dir.is_dir() {
            return Err(CorrectorError::NotADirectory(target_dir));
        }

        let config = match config_path {
            Some(path) => config::CorrectorConfig::load(path)?,
            None => config::CorrectorConfig::load_from_dir(&target_dir)?,
        };

        Ok(Self { config, target_dir })
    }

    /// Content files to process, in walk order
    pub fn content_files(&self) -> Result<Vec<PathBuf>> {
        let walker = content::ContentWalker::new(&self.target_dir, &self.config)?;
        Ok(walker.files())
    }

    /// Correct every content file in place
    pub fn fix(&self) -> anyhow::Result<commands::Summary> {
        commands::fix::run(self)
    }

    /// Report files that would change, without writing
    pub fn check(&self) -> anyhow::Result<commands::Summary> {
        commands::check::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corrector::new(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CorrectorError::NotFound(_)));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.md");
        fs::write(&file, "---\n---\n").unwrap();

        let err = Corrector::new(&file).unwrap_err();
        assert!(matches!(err, CorrectorError::NotADirectory(_)));
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, "extensions: [markdown]\n").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("b.markdown"), "").unwrap();

        let corrector = Corrector::with_config_file(dir.path(), Some(&config_path)).unwrap();
        let files = corrector.content_files().unwrap();
        assert_eq!(files, vec![dir.path().join("b.markdown")]);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yml");
        let err = Corrector::with_config_file(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, CorrectorError::Config { .. }));
    }
}
