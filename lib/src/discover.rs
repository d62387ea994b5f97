use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "h"];

/// Recursively collects every file under `root` whose extension is one of
/// `extensions`. Symlinked directories are not descended into, but a matching
/// symlink to a file is kept. The result is sorted.
pub fn find_source_files<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;

        if is_file_or_link_to_file(&entry) && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();

    log::debug!("found {} source files under {}", files.len(), root.display());

    Ok(files)
}

fn is_file_or_link_to_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();

    file_type.is_file()
        || (file_type.is_symlink()
            && fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_file()))
}

pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extensions
                .iter()
                .any(|candidate| candidate.as_ref() == extension)
        })
}
