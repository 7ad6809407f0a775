//! Operation outcomes for the never-throwing filesystem contract.
//!
//! Every `FileSystem` operation returns an [`OpResult`]: the usable value
//! (a sentinel when the operation did not happen as requested) together
//! with an optional machine-readable [`Failure`]. Callers that only want
//! the sentinel behavior read the value; callers that want to branch on
//! the failure kind inspect [`OpResult::failure`]. Nothing here is ever
//! an `Err`; platform failures are absorbed at the operation boundary
//! and recorded in the diagnostic log.

use std::fmt;
use std::io;

/// Machine-readable classification of an absorbed filesystem failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Generic read/write/stat I/O failure.
    Io,
    /// Permission or access denial.
    AccessDenied,
    /// The path does not exist.
    NotFound,
    /// A rename/move step failed.
    Rename,
    /// The platform handle for UNC resolution could not be acquired or queried.
    Handle,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Io => "io",
            Self::AccessDenied => "access denied",
            Self::NotFound => "not found",
            Self::Rename => "rename",
            Self::Handle => "handle",
        };
        f.write_str(name)
    }
}

/// An absorbed failure: its kind plus the underlying platform detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Classification from the error taxonomy.
    pub kind: FailureKind,
    /// Free-text description of the underlying platform error.
    pub detail: String,
}

impl Failure {
    /// Creates a failure with an explicit kind.
    #[must_use]
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }

    /// Classifies a `std::io::Error` into the taxonomy.
    #[must_use]
    pub fn from_io(err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => FailureKind::NotFound,
            io::ErrorKind::PermissionDenied => FailureKind::AccessDenied,
            _ => FailureKind::Io,
        };
        Self { kind, detail: err.to_string() }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

/// Result of a filesystem operation: a value plus an optional failure.
///
/// The value is always usable. On failure it is the operation's documented
/// sentinel (empty content, `false`, the original path, an empty listing),
/// and [`OpResult::failure`] carries the classification.
#[derive(Debug)]
pub struct OpResult<T> {
    value: T,
    failure: Option<Failure>,
}

impl<T> OpResult<T> {
    /// Wraps a successful value.
    #[must_use]
    pub fn succeeded(value: T) -> Self {
        Self { value, failure: None }
    }

    /// Wraps a sentinel value for an absorbed failure.
    #[must_use]
    pub fn absorbed(sentinel: T, failure: Failure) -> Self {
        Self { value: sentinel, failure: Some(failure) }
    }

    /// Returns `true` if the operation happened as requested.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }

    /// The absorbed failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Shorthand for the failure kind, if any.
    #[must_use]
    pub fn kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }

    /// Borrows the value (sentinel on failure).
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the result, returning the value (sentinel on failure).
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}
