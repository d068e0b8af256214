//! Rewriting a PDF with Ghostscript and keeping the result only if it is smaller

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::defaults::{COMPATIBILITY_LEVEL, PDF_SETTINGS};
use crate::error::{CompressError, Result};
use crate::tools::{run_captured, ToolPaths};

/// What happened to one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Looked already compressed; Ghostscript was not run
    Skipped,
    /// The candidate was larger, so the original was left alone
    Grew { original: u64, growth: u64 },
    /// The original was replaced by the candidate
    Shrank { original: u64, compressed: u64 },
}

impl Outcome {
    pub fn is_compressed(&self) -> bool {
        matches!(self, Outcome::Shrank { .. })
    }
}

/// Build the Ghostscript argument list for one rewrite.
pub fn gs_args(setting: &str, input: &Path, output: &Path) -> Vec<OsString> {
    let mut output_file = OsString::from("-sOutputFile=");
    output_file.push(escape_output_path(output));

    vec![
        OsString::from(format!("-dPDFSETTINGS=/{}", setting)),
        output_file,
        OsString::from("-sDEVICE=pdfwrite"),
        OsString::from(format!("-dCompatibilityLevel={}", COMPATIBILITY_LEVEL)),
        OsString::from("-dNOPAUSE"),
        OsString::from("-dQUIET"),
        OsString::from("-dBATCH"),
        OsString::from(input),
    ]
}

/// Ghostscript reads `%d` style page templates in output names; `%%` is a literal `%`.
fn escape_output_path(path: &Path) -> OsString {
    let lossy = path.to_string_lossy();
    if lossy.contains('%') {
        OsString::from(lossy.replace('%', "%%"))
    } else {
        path.as_os_str().to_owned()
    }
}

/// Where the candidate for the `index`-th target is staged.
///
/// The index prefix keeps targets that share a base name apart.
pub fn candidate_path(scratch: &Path, index: usize, target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "candidate.pdf".to_string());
    scratch.join(format!("{}-{}", index, name))
}

/// Runs Ghostscript over targets, staging candidates in a scratch directory
pub struct Compressor<'a> {
    tools: &'a ToolPaths,
    scratch: &'a Path,
}

impl<'a> Compressor<'a> {
    pub fn new(tools: &'a ToolPaths, scratch: &'a Path) -> Self {
        Self { tools, scratch }
    }

    /// Compress `target` in place if Ghostscript makes it no larger.
    pub fn compress(&self, index: usize, target: &Path) -> Result<Outcome> {
        let candidate = candidate_path(self.scratch, index, target);
        let args = gs_args(PDF_SETTINGS, target, &candidate);
        run_captured(&self.tools.gs, &args)?;

        let original = fs::metadata(target)
            .map_err(|e| CompressError::fs("Stating old file", target, e))?
            .len();
        let compressed = fs::metadata(&candidate)
            .map_err(|e| CompressError::fs("Stating new file", &candidate, e))?
            .len();

        if compressed > original {
            log::debug!(
                "{} grew from {} to {} bytes; keeping original",
                target.display(),
                original,
                compressed
            );
            return Ok(Outcome::Grew {
                original,
                growth: compressed - original,
            });
        }

        copy_file(&candidate, target)?;
        log::debug!(
            "{} shrank from {} to {} bytes",
            target.display(),
            original,
            compressed
        );
        Ok(Outcome::Shrank {
            original,
            compressed,
        })
    }
}

/// Replace `dst` with the bytes of `src`.
///
/// The bytes are staged in a sibling temporary file, synced, then renamed
/// over `dst`, so `dst` is either untouched or fully replaced.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let dir = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut input = File::open(src).map_err(|e| CompressError::fs("Opening", src, e))?;
    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| CompressError::fs("Creating temporary file in", dir, e))?;
    io::copy(&mut input, &mut staged).map_err(|e| CompressError::fs("Copying into", dst, e))?;

    // keep the original's mode rather than the temp file's 0600
    if let Ok(meta) = fs::metadata(dst) {
        staged
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| CompressError::fs("Setting permissions of", staged.path(), e))?;
    }
    staged
        .as_file()
        .sync_all()
        .map_err(|e| CompressError::fs("Syncing", staged.path(), e))?;
    staged
        .persist(dst)
        .map_err(|e| CompressError::fs("Replacing", dst, e.error))?;
    Ok(())
}
