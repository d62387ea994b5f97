use std::io::{self, Write};

use anyhow::{Context, Result};
use cfmt_runner::Outcome;

pub const SUCCESS: &str = "ClangFormat applied successfully.";
pub const NO_FILES: &str = "No matching source files found.";
pub const TOOL_FAILURE: &str = "Error while running ClangFormat:";
pub const UNEXPECTED: &str = "Unexpected error:";

/// Writes `outcome` as JSON to `out`, or as text split across `out` and `err`.
pub fn emit(outcome: &Outcome, json: bool, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, outcome).context("failed to serialize report")?;
        writeln!(out).context("failed to write report")?;
        return Ok(());
    }

    write_text(outcome, out, err).context("failed to write report")
}

/// Successes go to `out`, failures to `err`. Tool diagnostics are passed
/// through verbatim.
pub fn write_text(outcome: &Outcome, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Formatted { .. } => writeln!(out, "{SUCCESS}"),
        Outcome::NoFiles => writeln!(out, "{NO_FILES}"),
        Outcome::ToolFailure { stderr, .. } => {
            writeln!(err, "{TOOL_FAILURE}")?;
            write!(err, "{stderr}")?;
            if !stderr.is_empty() && !stderr.ends_with('\n') {
                writeln!(err)?;
            }
            Ok(())
        }
        Outcome::Unexpected { message } => writeln!(err, "{UNEXPECTED} {message}"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn render(outcome: &Outcome) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();

        write_text(outcome, &mut out, &mut err).unwrap();

        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn success_prints_only_confirmation() {
        let outcome = Outcome::Formatted {
            files: vec![PathBuf::from("main.c")],
            changed: vec![PathBuf::from("main.c")],
        };

        assert_eq!(
            render(&outcome),
            ("ClangFormat applied successfully.\n".to_owned(), String::new())
        );
    }

    #[test]
    fn tool_failure_echoes_diagnostics() {
        let outcome = Outcome::ToolFailure {
            exit_status: Some(1),
            stderr: "Invalid value for -style".to_owned(),
        };

        let (out, err) = render(&outcome);

        assert!(out.is_empty());
        assert_eq!(
            err,
            "Error while running ClangFormat:\nInvalid value for -style\n"
        );
    }

    #[test]
    fn unexpected_failure_includes_description() {
        let outcome = Outcome::Unexpected {
            message: "failed to launch `clang-format`: No such file or directory (os error 2)"
                .to_owned(),
        };

        let (out, err) = render(&outcome);

        assert!(out.is_empty());
        assert_eq!(
            err,
            "Unexpected error: failed to launch `clang-format`: No such file or directory (os error 2)\n"
        );
    }

    #[test]
    fn json_report_is_tagged_by_status() {
        let outcome = Outcome::ToolFailure {
            exit_status: Some(1),
            stderr: "X".to_owned(),
        };

        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "status": "tool_failure", "exit_status": 1, "stderr": "X" })
        );
        assert_eq!(
            serde_json::to_value(&Outcome::NoFiles).unwrap(),
            serde_json::json!({ "status": "no_files" })
        );
    }
}
