use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use cfmt_runner::{Formatter, Outcome, Runner, DEFAULT_EXTENSIONS, DEFAULT_PROGRAM};
use clap::Parser;

mod report;

/// Formats every C source and header file under a directory in place.
#[derive(Parser)]
#[clap(name = "cfmt", version)]
struct Cfmt {
    /// Directory to search recursively
    #[clap(short, long, value_parser, value_name = "PATH", default_value = ".")]
    root: PathBuf,

    /// Formatter program to run
    #[clap(
        short,
        long,
        value_parser,
        value_name = "PROGRAM",
        env = "CLANG_FORMAT",
        default_value = DEFAULT_PROGRAM
    )]
    formatter: OsString,

    /// Extra argument for the formatter, placed before `-i` and the files
    #[clap(long = "formatter-arg", value_parser, value_name = "ARG", allow_hyphen_values = true)]
    formatter_args: Vec<OsString>,

    /// File extension to match, without the dot [default: c, h]
    #[clap(short, long = "extension", value_parser, value_name = "EXT")]
    extensions: Vec<String>,

    /// Print the outcome as JSON
    #[clap(long, value_parser)]
    json: bool,

    /// Exit with 1 when the formatter fails and 2 on any other error
    #[clap(long, value_parser)]
    exit_code: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cfmt {
    fn runner(&self) -> Runner {
        let formatter = Formatter::new(&self.formatter).with_args(&self.formatter_args);
        let runner = Runner::new(&self.root, formatter);

        if self.extensions.is_empty() {
            runner.with_extensions(DEFAULT_EXTENSIONS.iter().copied())
        } else {
            runner.with_extensions(self.extensions.iter().cloned())
        }
    }
}

fn init_logger(verbose: u64) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Reports `outcome` and returns the exit status. A report that cannot be
/// written is logged and never changes the status.
fn finish(outcome: &Outcome, cfmt: &Cfmt, out: &mut impl Write, err: &mut impl Write) -> i32 {
    if let Err(error) = report::emit(outcome, cfmt.json, out, err) {
        log::error!("{error:#}");
    }

    outcome.exit_code(cfmt.exit_code)
}

fn main() {
    #[cfg(feature = "env-file")]
    dotenvy::dotenv().ok();

    let cfmt = Cfmt::parse();
    init_logger(cfmt.verbose.into());

    let runner = cfmt.runner();
    log::debug!(
        "formatting under {} with {:?}",
        runner.root().display(),
        cfmt.formatter
    );

    let outcome = runner.run();
    let code = finish(
        &outcome,
        &cfmt,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    process::exit(code);
}
