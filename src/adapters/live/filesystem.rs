//! Live filesystem adapter using `std::fs`.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, trace, warn};

use crate::adapters::live::unc::platform_resolver;
use crate::outcome::{Failure, FailureKind, OpResult};
use crate::ports::filesystem::FileSystem;
use crate::ports::unc::UncResolver;

/// Live filesystem adapter backed by real disk I/O.
///
/// Construct one at process start and pass it by reference to every
/// consumer, or use [`LiveFileSystem::shared`] for the process-wide
/// instance. The adapter holds no mutable state of its own.
pub struct LiveFileSystem {
    unc: Box<dyn UncResolver>,
}

impl LiveFileSystem {
    /// Creates an adapter with the platform's default UNC resolver.
    #[must_use]
    pub fn new() -> Self {
        Self { unc: platform_resolver() }
    }

    /// Creates an adapter with an explicit UNC resolver.
    #[must_use]
    pub fn with_resolver(unc: Box<dyn UncResolver>) -> Self {
        Self { unc }
    }

    /// Process-wide shared instance, initialized at most once.
    ///
    /// Concurrent first callers race on the same `OnceLock`, so duplicate
    /// construction is impossible.
    #[must_use]
    pub fn shared() -> &'static LiveFileSystem {
        static INSTANCE: OnceLock<LiveFileSystem> = OnceLock::new();
        INSTANCE.get_or_init(LiveFileSystem::new)
    }

    /// Lists immediate children, keeping directories or non-directories.
    ///
    /// Classification follows symlinks; entries that cannot be classified
    /// are skipped rather than aborting the listing.
    fn list_children(&self, path: &Path, want_directories: bool) -> OpResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not iterate directory");
                return OpResult::absorbed(Vec::new(), Failure::from_io(&err));
            }
        };

        let mut children = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    trace!(path = %path.display(), %err, "skipping unreadable entry");
                    continue;
                }
            };
            let child = entry.path();
            let is_directory = match fs::metadata(&child) {
                Ok(meta) => meta.is_dir(),
                Err(err) => {
                    trace!(path = %child.display(), %err, "skipping unclassifiable entry");
                    continue;
                }
            };
            if is_directory == want_directories {
                children.push(child);
            } else {
                trace!(path = %child.display(), "skipping entry of other kind");
            }
        }
        OpResult::succeeded(children)
    }
}

impl Default for LiveFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LiveFileSystem {
    fn read(&self, path: &Path) -> OpResult<String> {
        trace!(path = %path.display(), "reading file");
        match fs::read_to_string(path) {
            Ok(contents) => OpResult::succeeded(contents),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read file");
                OpResult::absorbed(String::new(), Failure::from_io(&err))
            }
        }
    }

    fn write(&self, path: &Path, contents: &str) -> OpResult<bool> {
        let temp_path = temp_sibling(path);
        trace!(path = %temp_path.display(), "writing file");
        if let Err(err) = write_whole(&temp_path, contents) {
            warn!(path = %temp_path.display(), %err, "failed to write file");
            return OpResult::absorbed(false, Failure::from_io(&err));
        }
        self.rename(&temp_path, path)
    }

    fn change_directory(&self, path: &Path) -> OpResult<bool> {
        match std::env::set_current_dir(path) {
            Ok(()) => OpResult::succeeded(true),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not change directory");
                OpResult::absorbed(false, Failure::from_io(&err))
            }
        }
    }

    fn directory_exists(&self, path: &Path) -> OpResult<bool> {
        match fs::metadata(path) {
            Ok(meta) => OpResult::succeeded(meta.is_dir()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => OpResult::succeeded(false),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not check directory exists");
                OpResult::absorbed(false, Failure::from_io(&err))
            }
        }
    }

    fn file_exists(&self, path: &Path) -> OpResult<bool> {
        match fs::metadata(path) {
            Ok(meta) => OpResult::succeeded(meta.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => OpResult::succeeded(false),
            Err(err) => {
                // Permission problems count as "does not exist".
                warn!(path = %path.display(), %err, "could not check file exists");
                OpResult::absorbed(false, Failure::from_io(&err))
            }
        }
    }

    fn create_directory(&self, path: &Path) -> OpResult<bool> {
        if *self.directory_exists(path).value() {
            return OpResult::succeeded(true);
        }
        match fs::create_dir(path) {
            Ok(()) => OpResult::succeeded(true),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not create directory");
                OpResult::absorbed(false, Failure::from_io(&err))
            }
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> OpResult<bool> {
        trace!(from = %from.display(), to = %to.display(), "renaming file");
        match fs::rename(from, to) {
            Ok(()) => OpResult::succeeded(true),
            Err(err) => {
                warn!(from = %from.display(), to = %to.display(), %err, "could not rename");
                OpResult::absorbed(false, Failure::new(FailureKind::Rename, err.to_string()))
            }
        }
    }

    fn remove(&self, path: &Path) -> OpResult<bool> {
        debug!(path = %path.display(), "removing path");
        // A symlink is removed as a file, not through its target.
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return OpResult::succeeded(true);
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "could not remove path");
                return OpResult::absorbed(false, Failure::from_io(&err));
            }
        };
        let removed = if meta.is_dir() { fs::remove_dir(path) } else { fs::remove_file(path) };
        match removed {
            Ok(()) => OpResult::succeeded(true),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not remove path");
                OpResult::absorbed(false, Failure::from_io(&err))
            }
        }
    }

    fn absolute(&self, path: &Path) -> OpResult<PathBuf> {
        match fs::canonicalize(path) {
            Ok(resolved) => OpResult::succeeded(resolved),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not get canonical path");
                OpResult::absorbed(path.to_path_buf(), Failure::from_io(&err))
            }
        }
    }

    fn canonical_unc(&self, path: &Path) -> OpResult<PathBuf> {
        if let Some(unc_path) = self.unc.resolve(path) {
            return OpResult::succeeded(unc_path);
        }
        self.absolute(path)
    }

    fn directories(&self, path: &Path) -> OpResult<Vec<PathBuf>> {
        self.list_children(path, true)
    }

    fn files(&self, path: &Path) -> OpResult<Vec<PathBuf>> {
        self.list_children(path, false)
    }
}

/// Temporary sibling path for the write-then-rename sequence.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".new");
    PathBuf::from(name)
}

fn write_whole(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.write_all(b"\n")
}
