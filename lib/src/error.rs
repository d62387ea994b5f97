use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to walk source tree: {0}")]
    Discovery(#[from] walkdir::Error),

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("formatter exited with {}", describe_status(.status))]
    ToolFailure { status: Option<i32>, stderr: String },
}

/// How a failure is reported: the formatter itself complaining, or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ExternalTool,
    Unexpected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ToolFailure { .. } => ErrorKind::ExternalTool,
            Self::Discovery(_) | Self::Launch { .. } | Self::Read { .. } => ErrorKind::Unexpected,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match *status {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_owned(),
    }
}
