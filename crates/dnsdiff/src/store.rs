use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::revision::Revision;

/// Source of serialized record-set snapshots
pub trait SnapshotStore {
    /// Read the line-oriented text of a revision
    fn read_revision(&self, revision: Revision) -> Result<String>;
}

/// A snapshot store backed by a directory of `.hosts` files
///
/// Revision `n` lives in `<dir>/<n>.hosts` and the current snapshot in
/// `<dir>/current.hosts`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the file holding `revision`
    pub fn path_for(&self, revision: Revision) -> PathBuf {
        match revision {
            Revision::Current => self.root.join("current.hosts"),
            Revision::Numbered(rev) => self.root.join(format!("{}.hosts", rev)),
        }
    }
}

impl SnapshotStore for DirStore {
    fn read_revision(&self, revision: Revision) -> Result<String> {
        let path = self.path_for(revision);
        debug!("reading {} from {}", revision, path.display());
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }
}
