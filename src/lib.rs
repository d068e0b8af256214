pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod format;
pub mod inspect;
pub mod job;
pub mod tools;

pub use cli::Args;
pub use compress::{Compressor, Outcome};
pub use config::Settings;
pub use error::CompressError;
pub use format::{humanize, percent};
pub use inspect::appears_compressed;
pub use job::Job;
pub use tools::ToolPaths;

use std::path::PathBuf;

/// Compress `targets` in place using the `gs` and `pdfinfo` found on `PATH`.
///
/// This is the entry point the command-line tool uses. Files that look like
/// Ghostscript already wrote them are skipped unless `settings.force` is set,
/// and a file is only rewritten when the new version is no larger.
///
/// # Returns
///
/// The number of files that were replaced by a smaller version. The first
/// error stops the run and leaves the remaining files untouched.
///
/// # Example
///
/// ```no_run
/// use compresspdf::{compress_files, Settings};
///
/// let settings = Settings::default().with_verbose(true);
/// let count = compress_files(settings, vec!["scan.pdf".into()]).unwrap();
/// assert!(count <= 1);
/// ```
pub fn compress_files(settings: Settings, targets: Vec<PathBuf>) -> Result<usize, CompressError> {
    if targets.is_empty() {
        return Err(CompressError::NoTargets);
    }
    let tools = ToolPaths::discover()?;
    Job::new(settings, tools, targets)?.run()
}
