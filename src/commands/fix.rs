//! Correct front-matter in place

use anyhow::Result;
use std::io::{self, Write};

use super::Summary;
use crate::content::{self, Outcome};
use crate::Corrector;

/// Correct every content file, printing progress to stdout
pub fn run(corrector: &Corrector) -> Result<Summary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(corrector, &mut out)
}

/// Correct every content file, printing progress to `out`
///
/// A file that fails to load or save is reported and the run moves on to the
/// next one.
pub fn run_with_output<W: Write>(corrector: &Corrector, out: &mut W) -> Result<Summary> {
    let start = std::time::Instant::now();
    let files = corrector.content_files()?;
    let options = &corrector.config.output;
    let mut summary = Summary::default();

    writeln!(out, "Directory: {}", corrector.target_dir.display())?;

    for path in files {
        write!(out, "Processing '{}' ... ", content::display_name(&path))?;
        out.flush()?;

        match content::process_file(&path, options) {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Updated(changes) => {
                        writeln!(out, "Finished")?;
                        writeln!(out, "  {}", changes)?;
                    }
                    Outcome::Unchanged => writeln!(out, "Finished (unchanged)")?,
                    Outcome::Skipped => writeln!(out, "Skipped (no front-matter)")?,
                }
                summary.record(&outcome);
            }
            Err(e) => {
                writeln!(out, "Failed")?;
                writeln!(out, "  {}", e)?;
                tracing::warn!("Failed to correct {:?}: {}", path, e);
                summary.record_failure(path, e);
            }
        }
    }

    writeln!(out, "{}", summary)?;
    tracing::info!("Completed in {:.2}s", start.elapsed().as_secs_f64());

    Ok(summary)
}
