//! Durable local store
//!
//! One JSON file per collection under a data directory, plus named slots
//! for singletons (settings, session). All mutation goes through a single
//! in-process write lock covering the whole read-modify-write cycle; the
//! cross-process race on the file replace remains (see crate docs).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use portal_core::{DomainError, Entity, RepoResult};

use super::table::Table;

/// Handle to the on-disk fallback store; cheap to clone
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<Inner>,
}

struct Inner {
    root: PathBuf,
    /// Serializes every read-modify-write cycle within this process
    write_lock: Mutex<()>,
}

impl LocalStore {
    /// Open (creating if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "opened local store");
        Ok(Self {
            inner: Arc::new(Inner {
                root,
                write_lock: Mutex::new(()),
            }),
        })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.inner.root.join(format!("{name}.json"))
    }

    /// Read a whole collection. Absent or corrupt files yield an empty
    /// table, never an error.
    pub fn read<E: Entity>(&self) -> Table<E> {
        read_json(&self.file_path(E::COLLECTION)).unwrap_or_default()
    }

    /// Run a read-modify-write cycle on a collection under the write lock.
    ///
    /// The closure returns whether it changed anything; the file is only
    /// rewritten when it did.
    pub fn mutate<E, F>(&self, f: F) -> RepoResult<bool>
    where
        E: Entity,
        F: FnOnce(&mut Table<E>) -> bool,
    {
        let _guard = self.inner.write_lock.lock();
        let mut table = self.read::<E>();
        let changed = f(&mut table);
        if changed {
            self.write_file(E::COLLECTION, &table)?;
        }
        Ok(changed)
    }

    /// Read a named singleton slot
    pub fn read_slot<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        read_json(&self.file_path(name))
    }

    /// Replace a named singleton slot
    pub fn write_slot<T: Serialize>(&self, name: &str, value: &T) -> RepoResult<()> {
        let _guard = self.inner.write_lock.lock();
        self.write_file(name, value)
    }

    /// Remove a named singleton slot; absent slots are fine
    pub fn remove_slot(&self, name: &str) {
        let _guard = self.inner.write_lock.lock();
        if let Err(e) = fs::remove_file(self.file_path(name)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(slot = name, error = %e, "failed to remove slot");
            }
        }
    }

    /// Whole-file replace via temp file + rename, caller holds the lock
    fn write_file<T: Serialize>(&self, name: &str, value: &T) -> RepoResult<()> {
        let path = self.file_path(name);
        let tmp = self.inner.root.join(format!(".{name}.json.tmp"));

        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| DomainError::Internal(format!("encode {name}: {e}")))?;

        let io = (|| {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, &path)
        })();
        io.map_err(|e| DomainError::Storage(format!("write {name}: {e}")))
    }
}

/// Read and decode a JSON file; `None` when absent or corrupt
fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable store file, treating as empty");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt store file, treating as empty");
            None
        }
    }
}
