//! CLI commands

pub mod check;
pub mod fix;
pub mod list;

use std::fmt;
use std::path::PathBuf;

use crate::content::Outcome;

/// Per-run tally of file outcomes
#[derive(Debug, Default)]
pub struct Summary {
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    /// Files that could not be read, parsed or written, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Updated(_) => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    fn record_failure(&mut self, path: PathBuf, error: impl fmt::Display) {
        self.failed.push((path, error.to_string()));
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.skipped + self.failed.len()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} updated, {} unchanged, {} skipped, {} failed",
            self.total(),
            self.updated,
            self.unchanged,
            self.skipped,
            self.failed.len()
        )
    }
}
