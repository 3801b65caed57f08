//! Content file model and the per-file correction cycle

use serde_yaml::Mapping;
use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter::{self, FrontMatterError};
use super::transform::{self, Changes};
use crate::config::OutputConfig;
use crate::error::{CorrectorError, Result};

/// UTF-8 byte order mark some editors put in front of the first line
const BOM: char = '\u{feff}';

/// A markdown file loaded for correction
#[derive(Debug, Clone)]
pub struct ContentFile {
    /// Source path, rewritten in place on save
    pub path: PathBuf,
    /// Parsed front-matter
    pub front_matter: Mapping,
    /// Document lines outside the front-matter block, delimiters excluded
    pub body: Vec<String>,
    /// Original file content
    source: String,
    has_front_matter: bool,
}

/// Result of running the correction cycle on one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file content changed (or would change, when only checking)
    Updated(Changes),
    /// The corrected file is byte-identical to the original
    Unchanged,
    /// The file has no front-matter block
    Skipped,
}

impl ContentFile {
    /// Read and parse a content file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| CorrectorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(path, source)
    }

    /// Parse already loaded content
    pub fn from_source<P: AsRef<Path>>(path: P, source: String) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = source.strip_prefix(BOM).unwrap_or(&source);
        let segments = frontmatter::split_lines(text.lines());

        if segments.is_unterminated() {
            return Err(CorrectorError::Parse {
                path,
                source: FrontMatterError::Unterminated,
            });
        }

        let front_matter = frontmatter::parse(&segments.front_matter_text()).map_err(|source| {
            CorrectorError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        let body = segments.body.iter().map(|line| line.to_string()).collect();
        let has_front_matter = segments.has_front_matter();

        Ok(Self {
            path,
            front_matter,
            body,
            source,
            has_front_matter,
        })
    }

    pub fn has_front_matter(&self) -> bool {
        self.has_front_matter
    }

    /// Apply every front-matter transform
    pub fn adjust(&mut self) -> Changes {
        transform::apply(&mut self.front_matter)
    }

    /// Render the full file content from the current front-matter
    pub fn render(&self, options: &OutputConfig) -> Result<String> {
        frontmatter::render(&self.front_matter, &self.body, options).map_err(|source| {
            CorrectorError::Render {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Check that `content` splits and parses back to this file's state
    fn verify_rendered(&self, content: &str) -> Result<()> {
        let reread = Self::from_source(&self.path, content.to_string()).map_err(|e| {
            tracing::warn!("Rendered {:?} does not parse back: {}", self.path, e);
            self.round_trip_error()
        })?;

        if reread.front_matter != self.front_matter || reread.body != self.body {
            return Err(self.round_trip_error());
        }
        Ok(())
    }

    fn round_trip_error(&self) -> CorrectorError {
        CorrectorError::Render {
            path: self.path.clone(),
            source: FrontMatterError::RoundTrip,
        }
    }

    /// Write rendered content back to the file's path
    ///
    /// The whole content is rendered and read back before the file is opened,
    /// so a failure never leaves a half-written or unreadable file behind.
    pub fn save(&self, options: &OutputConfig) -> Result<()> {
        let content = self.render(options)?;
        self.verify_rendered(&content)?;
        self.write(&content)
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|source| CorrectorError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Correct one file in place
pub fn process_file<P: AsRef<Path>>(path: P, options: &OutputConfig) -> Result<Outcome> {
    correct(path.as_ref(), options, true)
}

/// Run the correction cycle without writing anything
pub fn check_file<P: AsRef<Path>>(path: P, options: &OutputConfig) -> Result<Outcome> {
    correct(path.as_ref(), options, false)
}

fn correct(path: &Path, options: &OutputConfig, write: bool) -> Result<Outcome> {
    let mut file = ContentFile::load(path)?;
    if !file.has_front_matter() {
        tracing::debug!("No front-matter in {:?}, skipping", path);
        return Ok(Outcome::Skipped);
    }

    let changes = file.adjust();
    let content = file.render(options)?;
    if content == file.source {
        tracing::debug!("{:?} is already normalized", path);
        return Ok(Outcome::Unchanged);
    }

    file.verify_rendered(&content)?;
    if write {
        file.write(&content)?;
    }
    Ok(Outcome::Updated(changes))
}

/// Last path component, lossily decoded
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
