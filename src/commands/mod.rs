//! Command implementations for the zaap CLI
//!
//! - list: show installed applications
//! - delete: remove one application by name, no prompts per item
//! - interactive: pick an application and choose what to remove

pub mod delete;
pub mod interactive;
pub mod list;
mod report;

use anyhow::{Context as AnyhowContext, Result};
use leftovers::{ApplicationIdentity, ArtifactRecord, BundleEntry, Scanner};

use crate::progress;

/// Identify and scan a bundle behind a spinner
fn scan_with_spinner(
    scanner: &Scanner,
    bundle: &BundleEntry,
) -> (ApplicationIdentity, ArtifactRecord) {
    let pb = progress::spinner(&format!("Scanning for {} files...", bundle.name));
    let result = scanner.scan_bundle(bundle);
    pb.finish_and_clear();
    result
}

/// Installed bundles, failing with context when the directory is unreadable
fn installed_bundles(dir: &std::path::Path) -> Result<Vec<BundleEntry>> {
    leftovers::list_bundles(dir)
        .with_context(|| format!("Failed to list applications in {}", dir.display()))
}
