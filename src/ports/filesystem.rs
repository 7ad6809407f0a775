//! Filesystem port: the one boundary between supervision logic and the OS.
//!
//! Every raw filesystem touch in the toolkit goes through this trait so
//! that higher-level code never handles platform errors. Operations absorb
//! all failures, log them, and return a sentinel inside an
//! [`OpResult`](crate::outcome::OpResult).

use std::path::{Path, PathBuf};

use crate::outcome::OpResult;

/// Filesystem primitives with a never-throwing contract.
///
/// Each method's outcome depends only on its arguments and the filesystem
/// state at call time; implementations hold no mutable domain state. On
/// failure the documented sentinel is returned and the failure kind is
/// recorded on the result; no method returns an error or panics.
pub trait FileSystem: Send + Sync {
    /// Reads the entire textual content of a file.
    ///
    /// Sentinel: empty string.
    fn read(&self, path: &Path) -> OpResult<String>;

    /// Writes `contents` (plus a trailing newline) to `path` atomically.
    ///
    /// The content is first written in full to a `.new` sibling, then
    /// renamed over the destination. A failure mid-write never leaves a
    /// half-written file at `path`; a failed rename reports `false` even
    /// though the sibling was persisted.
    ///
    /// Sentinel: `false`.
    fn write(&self, path: &Path, contents: &str) -> OpResult<bool>;

    /// Changes the process working directory.
    ///
    /// Sentinel: `false`.
    fn change_directory(&self, path: &Path) -> OpResult<bool>;

    /// Returns `true` iff `path` exists and is a directory.
    ///
    /// Sentinel: `false` (also when existence cannot be determined).
    fn directory_exists(&self, path: &Path) -> OpResult<bool>;

    /// Returns `true` iff `path` exists and is a regular file.
    ///
    /// Sentinel: `false` (also when existence cannot be determined, e.g.
    /// permission denied).
    fn file_exists(&self, path: &Path) -> OpResult<bool>;

    /// Creates a directory, treating an already-existing one as success.
    ///
    /// Sentinel: `false`.
    fn create_directory(&self, path: &Path) -> OpResult<bool>;

    /// Renames `from` to `to`.
    ///
    /// On failure the filesystem is left in its prior state.
    ///
    /// Sentinel: `false`.
    fn rename(&self, from: &Path, to: &Path) -> OpResult<bool>;

    /// Removes a file or empty directory. A nonexistent path counts as
    /// removed.
    ///
    /// Sentinel: `false`.
    fn remove(&self, path: &Path) -> OpResult<bool>;

    /// Fully resolves `path` to its canonical form.
    ///
    /// Sentinel: the original path, unmodified.
    fn absolute(&self, path: &Path) -> OpResult<PathBuf>;

    /// Resolves `path` to its canonical UNC-style form via the platform's
    /// handle-based query, falling back to [`FileSystem::absolute`] when
    /// no handle can be opened or the query fails.
    fn canonical_unc(&self, path: &Path) -> OpResult<PathBuf>;

    /// Lists the immediate children of `path` that are directories.
    ///
    /// Entries that fail individual inspection are skipped, not fatal.
    ///
    /// Sentinel: empty list.
    fn directories(&self, path: &Path) -> OpResult<Vec<PathBuf>>;

    /// Lists the immediate children of `path` that are not directories,
    /// including non-directory special entries.
    ///
    /// Entries that fail individual inspection are skipped, not fatal.
    ///
    /// Sentinel: empty list.
    fn files(&self, path: &Path) -> OpResult<Vec<PathBuf>>;
}
