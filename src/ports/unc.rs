//! UNC resolution capability, the only platform-specific seam.

use std::path::{Path, PathBuf};

/// Handle-based canonical path resolution.
///
/// One implementation per target platform, selected at build time by
/// [`platform_resolver`](crate::adapters::live::unc::platform_resolver).
/// `None` means the facility is unavailable or the query failed, and the
/// caller should fall back to plain canonicalization.
pub trait UncResolver: Send + Sync {
    /// Resolves `path` to its canonical UNC-style form.
    fn resolve(&self, path: &Path) -> Option<PathBuf>;
}
