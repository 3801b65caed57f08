//! List the content files a run would process

use anyhow::Result;
use std::io::{self, Write};

use crate::Corrector;

/// Print content files relative to the target directory
pub fn run(corrector: &Corrector) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(corrector, &mut out)
}

pub fn run_with_output<W: Write>(corrector: &Corrector, out: &mut W) -> Result<()> {
    let files = corrector.content_files()?;
    writeln!(out, "Content files ({}):", files.len())?;
    for path in &files {
        let relative = path.strip_prefix(&corrector.target_dir).unwrap_or(path);
        writeln!(out, "  {}", relative.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_content_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("_index.md"), "").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();

        let corrector = Corrector::new(dir.path()).unwrap();
        let mut out = Vec::new();
        run_with_output(&corrector, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Content files (2):\n  a.md\n  b.md\n"
        );
    }
}
