//! Fake `gs` and `pdfinfo` for driving the pipeline without real tools.
//!
//! Behavior is read from files next to each target:
//! - `<target>.info` is printed by `pdfinfo`; without it `pdfinfo` fails.
//! - `<target>.out` is copied to the output by `gs`; without it `gs` fails.
//! - every `pdfinfo` call appends a line to `<target>.calls`.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use compresspdf::ToolPaths;
use tempfile::TempDir;

const FAKE_PDFINFO: &str = r#"#!/bin/sh
echo called >> "$1.calls"
if [ -f "$1.info" ]; then
    cat "$1.info"
    exit 0
fi
echo "Syntax Error: Couldn't open file '$1'" >&2
exit 1
"#;

const FAKE_GS: &str = r#"#!/bin/sh
out=""
input=""
for arg in "$@"; do
    case "$arg" in
        -sOutputFile=*) out="${arg#-sOutputFile=}" ;;
    esac
    input="$arg"
done
if [ ! -f "$input.out" ]; then
    echo "Error: /undefinedfilename in ($input)" >&2
    exit 1
fi
cat "$input.out" > "$out"
"#;

static TOOL_DIR: OnceLock<TempDir> = OnceLock::new();

/// Directory holding executable `gs` and `pdfinfo` fakes.
///
/// Written once before any test spawns a process, so no child can inherit
/// a write handle to the scripts.
pub fn tool_dir() -> &'static Path {
    TOOL_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("Failed to create tool directory");
            for (name, body) in [("gs", FAKE_GS), ("pdfinfo", FAKE_PDFINFO)] {
                let path = dir.path().join(name);
                fs::write(&path, body).expect("Failed to write fake tool");
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                    .expect("Failed to mark fake tool executable");
            }
            dir
        })
        .path()
}

pub fn fake_tools() -> ToolPaths {
    let dir = tool_dir();
    ToolPaths::new(dir.join("gs"), dir.join("pdfinfo"))
}

/// `PATH` value that finds the fakes first, then the shell utilities they use.
pub fn fake_path() -> String {
    format!("{}:/usr/bin:/bin", tool_dir().display())
}

fn sidecar(target: &Path, ext: &str) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(ext);
    PathBuf::from(name)
}

/// A directory of target PDFs with their fake-tool sidecars
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        // Make sure the fakes exist before this test spawns anything.
        tool_dir();
        Self {
            dir: tempfile::tempdir().expect("Failed to create workspace"),
        }
    }

    pub fn pdf(&self, name: &str, body: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create target directory");
        }
        fs::write(&path, body).expect("Failed to write target");
        path
    }

    pub fn with_producer(&self, target: &Path, producer: &str) {
        let info = format!(
            "Title:          test\nProducer:       {}\nPages:          1\n",
            producer
        );
        self.with_info(target, &info);
    }

    pub fn with_info(&self, target: &Path, info: &str) {
        fs::write(sidecar(target, ".info"), info).expect("Failed to write info sidecar");
    }

    pub fn with_gs_output(&self, target: &Path, body: &[u8]) {
        fs::write(sidecar(target, ".out"), body).expect("Failed to write gs sidecar");
    }

    pub fn info_calls(&self, target: &Path) -> usize {
        fs::read_to_string(sidecar(target, ".calls"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }
}

/// `len` bytes starting with a PDF header
pub fn pdf_bytes(len: usize, fill: u8) -> Vec<u8> {
    let mut body = b"%PDF-1.7\n".to_vec();
    body.resize(len.max(body.len()), fill);
    body
}
