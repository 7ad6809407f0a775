//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between supervision logic and an
//! external system (the filesystem, the platform's handle-based path
//! resolution). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod unc;

pub use filesystem::FileSystem;
pub use unc::UncResolver;
