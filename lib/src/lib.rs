//! Finds C sources and headers under a directory and hands them to an
//! external formatter to be rewritten in place.

pub mod discover;
pub mod error;
pub mod formatter;
pub mod run;
pub mod snapshot;

pub use discover::{find_source_files, DEFAULT_EXTENSIONS};
pub use error::{Error, ErrorKind, Result};
pub use formatter::{Formatter, DEFAULT_PROGRAM};
pub use run::{Outcome, Runner};
pub use snapshot::Snapshot;
