use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "clang-format";

const IN_PLACE_FLAG: &str = "-i";

/// An external formatter invoked as `<program> <args..> -i <files..>`.
#[derive(Clone, Debug)]
pub struct Formatter {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Formatter {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the in-place flag and the file list.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn command(&self, files: &[PathBuf]) -> Command {
        let mut command = Command::new(&self.program);

        command
            .args(&self.args)
            .arg(IN_PLACE_FLAG)
            .args(files)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        command
    }

    /// Runs the formatter over `files` and waits for it to exit.
    pub fn format_in_place(&self, files: &[PathBuf]) -> Result<()> {
        log::info!(
            "running {} on {} files",
            self.program.to_string_lossy(),
            files.len()
        );

        let output = self
            .command(files)
            .output()
            .map_err(|source| Error::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailure {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
