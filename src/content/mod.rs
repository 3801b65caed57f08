//! Content module - front-matter extraction, correction and write-back

mod file;
pub mod frontmatter;
pub mod transform;
mod walker;

pub use file::{check_file, display_name, process_file, ContentFile, Outcome};
pub use frontmatter::FrontMatterError;
pub use transform::Changes;
pub use walker::ContentWalker;
