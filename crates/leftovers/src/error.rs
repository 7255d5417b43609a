use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the leftovers engine.
///
/// Unreadable catalog directories, failed identifier lookups and failed
/// deletions are not errors: they are folded into scan results and
/// deletion outcomes instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The installation directory could not be listed
    #[error("cannot read applications directory {path}: {source}")]
    InstallDirUnreadable {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// No bundle with the requested name exists
    #[error("application not found: {0}")]
    BundleNotFound(String),

    /// Bundle metadata has no usable identifier
    #[error("no bundle identifier in {0}")]
    MissingIdentifier(PathBuf),

    /// The identifier lookup tool failed
    #[error("identifier lookup failed: {0}")]
    LookupFailed(String),

    /// Info.plist could not be parsed
    #[error("invalid bundle metadata: {0}")]
    Plist(#[from] plist::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error only means "no identifier available",
    /// which callers recover from with the name-derived fallback.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Error::MissingIdentifier(_) | Error::LookupFailed(_) | Error::Plist(_)
        )
    }
}

/// Result type for leftovers operations
pub type Result<T> = std::result::Result<T, Error>;
