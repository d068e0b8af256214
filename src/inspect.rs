//! Detecting files that Ghostscript already rewrote
//!
//! `pdfinfo` prints one `Key: value` record per line. A file whose
//! `Producer` mentions Ghostscript has most likely been through this tool
//! before, so compressing it again would only waste time.

use std::ffi::OsString;
use std::path::Path;

use crate::config::defaults::{PRODUCER_KEY, PRODUCER_SIGNATURE};
use crate::error::{CompressError, Result};
use crate::tools::{command_line, run_captured, ToolPaths};

/// One `key: value` line of metadata output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Key with surrounding whitespace removed
    pub key: String,
    /// Everything after the first colon, untrimmed
    pub value: String,
}

/// Split metadata output into records.
///
/// Blank lines are ignored. Any other line without a colon is returned as
/// `Err(line)`.
pub fn parse_records(output: &str) -> std::result::Result<Vec<Record>, String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(':') {
            Some((key, value)) => Ok(Record {
                key: key.trim().to_string(),
                value: value.to_string(),
            }),
            None => Err(line.to_string()),
        })
        .collect()
}

/// True if any record is a Producer naming Ghostscript.
pub fn produced_by_ghostscript(records: &[Record]) -> bool {
    records
        .iter()
        .any(|r| r.key == PRODUCER_KEY && r.value.contains(PRODUCER_SIGNATURE))
}

/// Ask `pdfinfo` about `target` and report whether it looks already compressed.
pub fn appears_compressed(tools: &ToolPaths, target: &Path) -> Result<bool> {
    let args = [OsString::from(target)];
    let output = run_captured(&tools.pdfinfo, &args)?;

    let records = parse_records(&output).map_err(|line| CompressError::MalformedOutput {
        command: command_line(&tools.pdfinfo, &args),
        line,
        output: output.clone(),
    })?;

    let compressed = produced_by_ghostscript(&records);
    log::debug!(
        "{} {} a Ghostscript producer",
        target.display(),
        if compressed { "has" } else { "lacks" }
    );
    Ok(compressed)
}
