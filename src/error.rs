use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("You must specify the name of at least one pdf to compress")]
    NoTargets,

    #[error("Could not find {tool:?} in the PATH")]
    ToolNotFound { tool: String },

    #[error("Failed to start {command}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("running {command} returned {output:?} ({status})")]
    ExternalTool {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("Unexpected line of output {line:?} in \n{output}\n, when running {command}")]
    MalformedOutput {
        command: String,
        line: String,
        output: String,
    },

    #[error("{action} {path:?}")]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompressError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompressError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompressError>;
