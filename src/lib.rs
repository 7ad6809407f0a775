//! Filesystem access layer for a process-supervision toolkit.
//!
//! All raw filesystem interaction (reads, writes, renames, existence
//! checks, directory listings, path canonicalization) goes through the
//! [`FileSystem`] port so that supervision logic never touches the OS
//! directly and never handles platform errors. Operations absorb every
//! failure at their own boundary, log it, and return a safe sentinel
//! wrapped in an [`OpResult`] that also carries the machine-readable
//! failure kind.
//!
//! [`LiveFileSystem`] is the real-disk adapter; construct it once at
//! process start (or use [`LiveFileSystem::shared`]) and pass it by
//! reference to consumers. [`MemoryFileSystem`] implements the same
//! contract in memory for tests.
//!
//! ```
//! use std::path::Path;
//! use svfs::{FileSystem, MemoryFileSystem};
//!
//! let fs = MemoryFileSystem::new();
//! fs.create_directory(Path::new("/svc"));
//! assert!(*fs.write(Path::new("/svc/status"), "up").value());
//! assert_eq!(fs.read(Path::new("/svc/status")).into_value(), "up\n");
//! ```

pub mod adapters;
pub mod logging;
pub mod outcome;
pub mod ports;

pub use adapters::live::LiveFileSystem;
pub use adapters::memory::MemoryFileSystem;
pub use outcome::{Failure, FailureKind, OpResult};
pub use ports::{FileSystem, UncResolver};
