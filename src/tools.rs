//! Locating and running the external programs

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::defaults::{GS_PROGRAM, PDFINFO_PROGRAM};
use crate::error::{CompressError, Result};

/// Resolved locations of the two external programs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub gs: PathBuf,
    pub pdfinfo: PathBuf,
}

impl ToolPaths {
    pub fn new(gs: impl Into<PathBuf>, pdfinfo: impl Into<PathBuf>) -> Self {
        Self {
            gs: gs.into(),
            pdfinfo: pdfinfo.into(),
        }
    }

    /// Search `PATH` for `gs` and `pdfinfo`.
    pub fn discover() -> Result<Self> {
        let path = env::var_os("PATH").unwrap_or_default();
        Self::discover_in(&path)
    }

    /// Search the given `PATH`-style list for `gs` and `pdfinfo`.
    pub fn discover_in(search_path: &OsStr) -> Result<Self> {
        let gs = locate(GS_PROGRAM, search_path)?;
        let pdfinfo = locate(PDFINFO_PROGRAM, search_path)?;
        log::debug!("using {} and {}", gs.display(), pdfinfo.display());
        Ok(Self { gs, pdfinfo })
    }
}

fn locate(program: &str, search_path: &OsStr) -> Result<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
        .ok_or_else(|| CompressError::ToolNotFound {
            tool: program.to_string(),
        })
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{}.exe", program)), dir.join(program)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Render a program and its arguments the way they were passed, for error messages.
pub fn command_line(program: &Path, args: &[OsString]) -> String {
    let parts: Vec<String> = std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| format!("{:?}", part.to_string_lossy()))
        .collect();
    format!("[{}]", parts.join(" "))
}

/// Run a program to completion and return its stdout followed by its stderr.
///
/// A non-zero exit is an error carrying the command line and the captured output.
pub fn run_captured(program: &Path, args: &[OsString]) -> Result<String> {
    let command = command_line(program, args);
    log::debug!("running {}", command);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| CompressError::Launch {
            command: command.clone(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(CompressError::ExternalTool {
            command,
            status: output.status,
            output: combined,
        });
    }

    Ok(combined)
}
