//! Artifact discovery for one application
//!
//! The scanner only stats and lists directories; it never opens files and
//! never treats a missing or unreadable location as an error.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::backend::IdentifierResolver;
use crate::catalog::{DIRECT_PATHS, LISTINGS};
use crate::matcher::Rule;
use crate::types::{ApplicationIdentity, ArtifactRecord, BundleEntry, Category, ScanConfig};

/// Maps an application identity to the artifacts it left on disk.
pub struct Scanner {
    config: ScanConfig,
    resolver: Box<dyn IdentifierResolver>,
}

impl Scanner {
    pub fn new(config: ScanConfig, resolver: Box<dyn IdentifierResolver>) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Build the identity for a bundle, querying its embedded identifier
    pub fn identify(&self, bundle: &BundleEntry) -> ApplicationIdentity {
        let identifier = self.resolver.identifier_of(&bundle.path);
        ApplicationIdentity::new(bundle.name.clone(), bundle.path.clone(), identifier)
    }

    /// Identify and scan a bundle in one step
    pub fn scan_bundle(&self, bundle: &BundleEntry) -> (ApplicationIdentity, ArtifactRecord) {
        let identity = self.identify(bundle);
        let record = self.scan(&identity);
        (identity, record)
    }

    /// Walk the catalog for one application.
    pub fn scan(&self, identity: &ApplicationIdentity) -> ArtifactRecord {
        let identifier = identity.identifier();
        if self.config.verbose {
            log::info!("Bundle ID: {identifier}");
        } else {
            log::debug!(
                "Scanning {} as {}{}",
                identity.name,
                identifier,
                if identity.is_fallback() { " (derived from name)" } else { "" }
            );
        }

        let mut record = ArtifactRecord::new();

        if is_plain_component(&identifier) {
            for direct in DIRECT_PATHS {
                let candidate = direct.candidate(&self.config, &identifier);
                if path_exists(&candidate) {
                    self.insert(&mut record, direct.category, &candidate);
                }
            }
        } else {
            log::debug!("Skipping direct paths for unusable identifier {identifier:?}");
        }

        // Each listing is independent; collect keeps catalog order.
        let listed: Vec<(Category, Vec<PathBuf>)> = LISTINGS
            .par_iter()
            .map(|listing| {
                let dir = listing.directory(&self.config);
                let matches = list_matches(&dir, listing.rule, &identity.name, &identifier);
                (listing.category, matches)
            })
            .collect();

        for (category, paths) in listed {
            for path in paths {
                self.insert(&mut record, category, &path);
            }
        }

        log::debug!("Found {} artifacts for {}", record.len(), identity.name);
        record
    }

    fn insert(&self, record: &mut ArtifactRecord, category: Category, path: &Path) {
        let path = normalize(path);
        if self.config.dedupe && record.contains(category, &path) {
            return;
        }
        record.push(category, path);
    }
}

/// Entries of `dir` accepted by `rule`, in listing order.
fn list_matches(dir: &Path, rule: Rule, app_name: &str, identifier: &str) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter(|entry| rule.matches(&entry.file_name().to_string_lossy(), app_name, identifier))
        .map(|entry| entry.path())
        .collect()
}

/// Existence check that also counts dangling symlinks
fn path_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// An identifier joined onto a directory must name a single entry inside it
fn is_plain_component(identifier: &str) -> bool {
    !identifier.is_empty() && identifier != "." && identifier != ".." && !identifier.contains('/')
}

/// Lexical cleanup so equal locations compare equal
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}
