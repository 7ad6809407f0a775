//! In-memory adapters for tests.

pub mod filesystem;

pub use filesystem::MemoryFileSystem;
