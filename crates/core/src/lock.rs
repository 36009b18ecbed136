// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-writer convention for the shared offline data.
//!
//! The replica and the pending-feedback list are shared by every process
//! using the same data directory. Writers hold a [`WriterLock`] for the
//! duration of a sync, a replay pass or a queue rewrite; readers never lock.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Held for a whole sync.
pub const SYNC_LOCK: &str = "sync.lock";
/// Held for a whole replay pass.
pub const REPLAY_LOCK: &str = "replay.lock";
/// Held while the pending-feedback list is rewritten.
pub const QUEUE_LOCK: &str = "queue.lock";

/// An exclusive advisory lock, released on drop.
#[derive(Debug)]
pub struct WriterLock {
    file: File,
    path: PathBuf,
}

impl WriterLock {
    /// Take the lock without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if another handle holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = open_lock_file(path)?;
        file.try_lock_exclusive().map_err(|_| Error::Busy)?;
        tracing::trace!(path = %path.display(), "writer lock acquired");

        Ok(WriterLock {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Take the lock, blocking until the current holder releases it.
    pub fn wait(path: &Path) -> Result<Self> {
        let file = open_lock_file(path)?;
        file.lock_exclusive()?;
        tracing::trace!(path = %path.display(), "writer lock acquired after wait");

        Ok(WriterLock {
            file,
            path: path.to_path_buf(),
        })
    }

    /// [`acquire`](Self::acquire) the lock file `name` in `dir`.
    pub fn acquire_in(dir: &Path, name: &str) -> Result<Self> {
        Self::acquire(&dir.join(name))
    }

    /// [`wait`](Self::wait) for the lock file `name` in `dir`.
    pub fn wait_in(dir: &Path, name: &str) -> Result<Self> {
        Self::wait(&dir.join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_lock_file(path: &Path) -> Result<File> {
    Ok(OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?)
}

impl Drop for WriterLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
