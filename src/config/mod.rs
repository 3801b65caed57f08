//! Configuration module

mod corrector;

pub use corrector::{CorrectorConfig, OutputConfig, CONFIG_FILE};
