//! Running the skip/compress pipeline over every target

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::compress::{Compressor, Outcome};
use crate::config::defaults::SCRATCH_PREFIX;
use crate::config::Settings;
use crate::error::{CompressError, Result};
use crate::format::{humanize, percent};
use crate::inspect::appears_compressed;
use crate::tools::ToolPaths;

/// One run over a list of target PDFs.
///
/// Owns the scratch directory, which is removed when the job is dropped.
pub struct Job {
    settings: Settings,
    tools: ToolPaths,
    targets: Vec<PathBuf>,
    scratch: TempDir,
}

impl Job {
    /// Fails with [`CompressError::NoTargets`] on an empty target list.
    pub fn new(settings: Settings, tools: ToolPaths, targets: Vec<PathBuf>) -> Result<Self> {
        if targets.is_empty() {
            return Err(CompressError::NoTargets);
        }
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir()
            .map_err(|e| CompressError::fs("Creating scratch directory in", std::env::temp_dir(), e))?;
        log::debug!("staging candidates in {}", scratch.path().display());

        Ok(Self {
            settings,
            tools,
            targets,
            scratch,
        })
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    /// Process all targets, printing to stdout. Returns how many shrank.
    pub fn run(&self) -> Result<usize> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Process all targets in order, stopping at the first error.
    pub fn run_with(&self, out: &mut impl Write) -> Result<usize> {
        let compressor = Compressor::new(&self.tools, self.scratch.path());
        let mut count = 0;

        for (index, target) in self.targets.iter().enumerate() {
            let outcome = self.process(&compressor, index, target)?;
            self.report(out, target, &outcome);
            if outcome.is_compressed() {
                count += 1;
            }
        }

        if !self.settings.quiet {
            print_line(out, &summary(count));
        }
        Ok(count)
    }

    fn process(&self, compressor: &Compressor<'_>, index: usize, target: &Path) -> Result<Outcome> {
        if !self.settings.force && appears_compressed(&self.tools, target)? {
            return Ok(Outcome::Skipped);
        }
        compressor.compress(index, target)
    }

    fn report(&self, out: &mut impl Write, target: &Path, outcome: &Outcome) {
        if !self.settings.verbose {
            return;
        }
        let line = match *outcome {
            Outcome::Skipped => format!(
                "Skipping {} as it appears to be already-compressed",
                target.display()
            ),
            Outcome::Grew { original, growth } => format!(
                "Compressing {:?} made it grow from {} by {}; skipping.",
                target.display().to_string(),
                humanize(original),
                humanize(growth)
            ),
            Outcome::Shrank {
                original,
                compressed,
            } => format!(
                "Shrank {:?} to {}, ({}% of its original size)",
                target.display().to_string(),
                humanize(compressed),
                percent(original, compressed)
            ),
        };
        print_line(out, &line);
    }
}

/// The closing line of a run, e.g. "Compressed 2 files".
pub fn summary(count: usize) -> String {
    if count == 1 {
        "Compressed 1 file".to_string()
    } else {
        format!("Compressed {} files", count)
    }
}

// Write failures are logged, never propagated.
fn print_line(out: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(out, "{}", line) {
        log::warn!("failed to write output: {}", e);
    }
}
