//! Report files whose front-matter would change, without writing

use anyhow::Result;
use std::io::{self, Write};

use super::Summary;
use crate::content::{self, Outcome};
use crate::Corrector;

/// Check every content file, printing pending changes to stdout
pub fn run(corrector: &Corrector) -> Result<Summary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(corrector, &mut out)
}

/// Check every content file, printing pending changes to `out`
pub fn run_with_output<W: Write>(corrector: &Corrector, out: &mut W) -> Result<Summary> {
    let files = corrector.content_files()?;
    let options = &corrector.config.output;
    let mut summary = Summary::default();

    for path in files {
        let relative = path.strip_prefix(&corrector.target_dir).unwrap_or(&path);
        match content::check_file(&path, options) {
            Ok(outcome) => {
                if let Outcome::Updated(changes) = &outcome {
                    writeln!(out, "Would update '{}': {}", relative.display(), changes)?;
                }
                summary.record(&outcome);
            }
            Err(e) => {
                writeln!(out, "Cannot check '{}': {}", relative.display(), e)?;
                summary.record_failure(path, e);
            }
        }
    }

    writeln!(out, "{}", summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_reports_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let pending = "---\nfoo: ~\nimage: x.jpg\n---\nbody\n";
        let clean = "---\nimage: /x.jpg\n---\nbody\n";
        fs::write(dir.path().join("pending.md"), pending).unwrap();
        fs::write(dir.path().join("clean.md"), clean).unwrap();

        let corrector = Corrector::new(dir.path()).unwrap();
        let mut out = Vec::new();
        let summary = run_with_output(&corrector, &mut out).unwrap();

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.unchanged, 1);
        assert!(!summary.has_failures());
        assert_eq!(
            fs::read_to_string(dir.path().join("pending.md")).unwrap(),
            pending
        );

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(
            "Would update 'pending.md': removed null properties: foo; made image path root-relative"
        ));
        assert!(!out.contains("clean.md"));
    }
}
