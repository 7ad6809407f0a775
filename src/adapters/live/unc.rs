//! UNC resolver adapters, one per target platform.

use std::path::{Path, PathBuf};

use crate::ports::unc::UncResolver;

/// Resolver for platforms without a handle-based path query.
///
/// Always declines, which makes `canonical_unc` fall back to plain
/// canonicalization.
pub struct PortableUncResolver;

impl UncResolver for PortableUncResolver {
    fn resolve(&self, _path: &Path) -> Option<PathBuf> {
        None
    }
}

/// Windows resolver backed by `GetFinalPathNameByHandle`.
///
/// Opens the path as a non-exclusive handle (read and write sharing,
/// backup semantics so directories qualify) and asks the kernel for the
/// final resolved path. Any failure at open or query time declines so the
/// caller falls back to plain canonicalization.
#[cfg(windows)]
pub struct NativeUncResolver;

#[cfg(windows)]
impl UncResolver for NativeUncResolver {
    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        native::final_path_by_handle(path)
    }
}

/// The build-time default resolver for this target.
#[must_use]
pub fn platform_resolver() -> Box<dyn UncResolver> {
    #[cfg(windows)]
    {
        Box::new(NativeUncResolver)
    }
    #[cfg(not(windows))]
    {
        Box::new(PortableUncResolver)
    }
}

#[cfg(windows)]
#[allow(unsafe_code)]
mod native {
    use std::ffi::OsString;
    use std::os::windows::ffi::{OsStrExt, OsStringExt};
    use std::path::{Path, PathBuf};
    use std::ptr;

    use tracing::warn;
    use windows_sys::Win32::Foundation::{CloseHandle, GENERIC_READ, INVALID_HANDLE_VALUE};
    use windows_sys::Win32::Storage::FileSystem::{
        CreateFileW, GetFinalPathNameByHandleW, FILE_FLAG_BACKUP_SEMANTICS, FILE_SHARE_READ,
        FILE_SHARE_WRITE, OPEN_EXISTING, VOLUME_NAME_DOS,
    };

    pub(super) fn final_path_by_handle(path: &Path) -> Option<PathBuf> {
        let wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();

        // Shared, backup-semantics open so directories and in-use files
        // can be queried without disturbing other handles.
        let handle = unsafe {
            CreateFileW(
                wide.as_ptr(),
                GENERIC_READ,
                FILE_SHARE_READ | FILE_SHARE_WRITE,
                ptr::null(),
                OPEN_EXISTING,
                FILE_FLAG_BACKUP_SEMANTICS,
                ptr::null_mut(),
            )
        };
        if handle == INVALID_HANDLE_VALUE {
            warn!(path = %path.display(), "could not open handle for UNC resolution");
            return None;
        }

        // Two-phase sizing: a short return means the buffer was filled, a
        // longer one is the required length including the terminator.
        let mut buffer: Vec<u16> = vec![0; wide.len() * 2];
        let resolved = loop {
            let len = unsafe {
                GetFinalPathNameByHandleW(
                    handle,
                    buffer.as_mut_ptr(),
                    u32::try_from(buffer.len()).unwrap_or(u32::MAX),
                    VOLUME_NAME_DOS,
                )
            };
            if len == 0 {
                warn!(path = %path.display(), "final path query failed");
                break None;
            }
            let len = len as usize;
            if len < buffer.len() {
                buffer.truncate(len);
                break Some(PathBuf::from(OsString::from_wide(&buffer)));
            }
            buffer.resize(len + 1, 0);
        };

        // Closed on every exit path; the handle never outlives this call.
        unsafe {
            CloseHandle(handle);
        }
        resolved
    }
}
