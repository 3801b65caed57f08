//! Error types

use std::path::PathBuf;
use thiserror::Error;

use crate::content::FrontMatterError;

/// Errors raised while correcting a content directory
#[derive(Error, Debug)]
pub enum CorrectorError {
    #[error("Path {0:?} does not exist")]
    NotFound(PathBuf),

    #[error("Path {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Error reading file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("Error rendering front-matter for {path:?}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("Error storing file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, CorrectorError>;
