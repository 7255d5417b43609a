//! # leftovers
//!
//! Finds the files a macOS application bundle scatters across `~/Library`
//! and `/Library`, and removes the bundle together with a chosen subset of
//! them.
//!
//! ## Flow
//!
//! 1. [`Scanner`] resolves the bundle identifier (falling back to the name
//!    with whitespace removed) and walks the fixed location [`catalog`],
//!    producing an [`ArtifactRecord`].
//! 2. [`DeletionPlanner`] turns a [`Selection`] into ordered
//!    [`DeletionAction`]s, bundle first.
//! 3. [`execute`] applies them, one [`DeletionOutcome`] per action.
//!
//! Partial results are normal: an unreadable location contributes nothing,
//! and a failed deletion is reported without stopping the batch.
//!
//! ## Example
//!
//! ```no_run
//! use leftovers::{DeletionPlanner, ScanConfig, Scanner, Selection};
//! use std::path::Path;
//!
//! let scanner = Scanner::new(
//!     ScanConfig::new("/Users/me"),
//!     Box::new(leftovers::backend::default_resolver()),
//! );
//! let bundle = leftovers::find_bundle(Path::new("/Applications"), "TestApp")?;
//! let (identity, record) = scanner.scan_bundle(&bundle);
//!
//! let actions = DeletionPlanner::new(true).plan(&identity.bundle_path, &record, Selection::All);
//! for outcome in leftovers::execute(&actions) {
//!     println!("{:?}: {}", outcome.result, outcome.path.display());
//! }
//! # Ok::<(), leftovers::Error>(())
//! ```

/// Bundle identifier lookup backends.
pub mod backend;
/// Installed bundle enumeration.
pub mod bundles;
/// Fixed table of artifact locations.
pub mod catalog;
/// Error types.
pub mod error;
pub mod executor;
pub mod matcher;
pub mod planner;
pub mod scanner;
/// Data model shared by scanner, planner and executor.
pub mod types;

pub use backend::IdentifierResolver;
pub use bundles::{find_bundle, list_bundles};
pub use error::{Error, Result};
pub use executor::{NoProgress, ProgressCallback, execute, execute_with_progress};
pub use planner::{DeletionPlanner, Selection};
pub use scanner::Scanner;
pub use types::{
    ApplicationIdentity, ArtifactRecord, BundleEntry, Category, DeletionAction, DeletionMode,
    DeletionOutcome, DeletionResult, DeletionSummary, ScanConfig, fallback_identifier,
};
