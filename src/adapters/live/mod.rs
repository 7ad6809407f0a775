//! Live adapters backed by the real operating system.

pub mod filesystem;
pub mod unc;

pub use filesystem::LiveFileSystem;
pub use unc::PortableUncResolver;

#[cfg(windows)]
pub use unc::NativeUncResolver;
