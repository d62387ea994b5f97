use std::path::PathBuf;

use serde::Serialize;

use crate::discover::{find_source_files, DEFAULT_EXTENSIONS};
use crate::error::{Error, ErrorKind, Result};
use crate::formatter::Formatter;
use crate::snapshot::Snapshot;

/// Formats every matching source file under a root directory in place.
#[derive(Clone, Debug)]
pub struct Runner {
    root: PathBuf,
    extensions: Vec<String>,
    formatter: Formatter,
}

impl Runner {
    pub fn new(root: impl Into<PathBuf>, formatter: Formatter) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect(),
            formatter,
        }
    }

    /// The working directory with the default `clang-format`.
    pub fn current_dir() -> Self {
        Self::new(".", Formatter::default())
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Runs once and folds every failure into the returned [`Outcome`].
    pub fn run(&self) -> Outcome {
        match self.try_run() {
            Ok(outcome) => outcome,
            Err(error) => {
                log::debug!("run failed: {error:?}");
                Outcome::from(error)
            }
        }
    }

    fn try_run(&self) -> Result<Outcome> {
        let files = find_source_files(&self.root, &self.extensions)?;

        if files.is_empty() {
            log::info!("nothing to format under {}", self.root.display());
            return Ok(Outcome::NoFiles);
        }

        let before = Snapshot::capture(&files);
        log::debug!("tracking changes to {} of {} files", before.len(), files.len());

        self.formatter.format_in_place(&files)?;

        let after = Snapshot::capture(&files);

        let changed = before.changed(&after);
        for path in &changed {
            log::info!("reformatted {}", path.display());
        }

        Ok(Outcome::Formatted { files, changed })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Formatted {
        files: Vec<PathBuf>,
        changed: Vec<PathBuf>,
    },
    NoFiles,
    ToolFailure {
        exit_status: Option<i32>,
        stderr: String,
    },
    Unexpected {
        message: String,
    },
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        match error {
            Error::ToolFailure { status, stderr } => Self::ToolFailure {
                exit_status: status,
                stderr,
            },
            error => Self::Unexpected {
                message: error.to_string(),
            },
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Formatted { .. } | Self::NoFiles)
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Formatted { .. } | Self::NoFiles => None,
            Self::ToolFailure { .. } => Some(ErrorKind::ExternalTool),
            Self::Unexpected { .. } => Some(ErrorKind::Unexpected),
        }
    }

    /// Process exit status. Always `0` unless `strict`, in which case tool
    /// failures exit `1` and anything else that went wrong exits `2`.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !strict || self.is_success() {
            return 0;
        }

        match self.error_kind() {
            None => 0,
            Some(ErrorKind::ExternalTool) => 1,
            Some(ErrorKind::Unexpected) => 2,
        }
    }
}
