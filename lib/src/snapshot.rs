use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Content digests of a file set at one point in time.
///
/// Only used to report what the formatter touched, so unreadable files are
/// logged and left out instead of failing the capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    digests: BTreeMap<PathBuf, blake3::Hash>,
}

impl Snapshot {
    pub fn capture(files: &[PathBuf]) -> Self {
        let mut digests = BTreeMap::new();

        for path in files {
            match digest(path) {
                Ok(hash) => {
                    digests.insert(path.clone(), hash);
                }
                Err(error) => log::warn!("not tracking changes: {error}"),
            }
        }

        Self { digests }
    }

    pub(crate) fn len(&self) -> usize {
        self.digests.len()
    }

    /// Paths hashed in both snapshots whose contents differ.
    pub fn changed(&self, after: &Self) -> Vec<PathBuf> {
        self.digests
            .iter()
            .filter(|(path, hash)| after.digests.get(*path).is_some_and(|other| other != *hash))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

fn digest(path: &Path) -> Result<blake3::Hash> {
    let data = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(blake3::hash(&data))
}
