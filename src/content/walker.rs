//! Content walker - selects the markdown files to correct

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::CorrectorConfig;
use crate::error::{CorrectorError, Result};

/// Walks a directory tree and yields content files in a stable order
pub struct ContentWalker<'a> {
    root: &'a Path,
    config: &'a CorrectorConfig,
    exclude: Vec<Pattern>,
}

impl<'a> ContentWalker<'a> {
    /// Create a walker, compiling the configured exclude patterns
    pub fn new(root: &'a Path, config: &'a CorrectorConfig) -> Result<Self> {
        let exclude = config
            .exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| CorrectorError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root,
            config,
            exclude,
        })
    }

    /// All content files below the root, sorted by file name per directory
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(self.root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_content_file(path) {
                continue;
            }

            if self.is_excluded(path) {
                tracing::debug!("Excluded: {:?}", path);
                continue;
            }

            files.push(path.to_path_buf());
        }

        files
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                self.config
                    .extensions
                    .iter()
                    .any(|ext| ext.eq_ignore_ascii_case(e))
            })
            .unwrap_or(false)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };
        self.exclude.iter().any(|pattern| pattern.matches(name))
    }
}
