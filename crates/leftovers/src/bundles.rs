//! Enumerate application bundles in an installation directory

use std::path::Path;

use crate::error::{Error, Result};
use crate::matcher::exact_name;
use crate::types::{BUNDLE_SUFFIX, BundleEntry};

/// Every `.app` entry in `dir`, in directory-listing order.
///
/// Unlike catalog directories, an unreadable installation directory is an
/// error: there is nothing to offer the user without it.
pub fn list_bundles(dir: &Path) -> Result<Vec<BundleEntry>> {
    let entries = std::fs::read_dir(dir).map_err(|source| Error::InstallDirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut bundles = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some(name) = file_name.strip_suffix(BUNDLE_SUFFIX) {
            bundles.push(BundleEntry {
                name: name.to_string(),
                path: entry.path(),
            });
        }
    }

    Ok(bundles)
}

/// Find a bundle by name. An exact match wins over a case-insensitive one.
pub fn find_bundle(dir: &Path, name: &str) -> Result<BundleEntry> {
    let bundles = list_bundles(dir)?;

    if let Some(found) = bundles.iter().find(|b| exact_name(&b.name, name)) {
        return Ok(found.clone());
    }

    let wanted = name.to_lowercase();
    bundles
        .into_iter()
        .find(|b| b.name.to_lowercase() == wanted)
        .ok_or_else(|| Error::BundleNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn install_dir(apps: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for app in apps {
            std::fs::create_dir_all(tmp.path().join(app)).unwrap();
        }
        tmp
    }

    #[test]
    fn test_list_bundles_only_app_entries() {
        let tmp = install_dir(&["TestApp.app", "Google Chrome.app", "Utilities", "notes.txt"]);

        let mut names: Vec<_> = list_bundles(tmp.path())
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["Google Chrome", "TestApp"]);
    }

    #[test]
    fn test_list_bundles_path_is_full_entry_path() {
        let tmp = install_dir(&["TestApp.app"]);
        let bundles = list_bundles(tmp.path()).unwrap();
        assert_eq!(bundles[0].path, tmp.path().join("TestApp.app"));
    }

    #[test]
    fn test_list_bundles_unreadable_dir() {
        let tmp = TempDir::new().unwrap();
        let err = list_bundles(&tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::InstallDirUnreadable { .. }));
    }

    #[test]
    fn test_find_bundle_case_insensitive() {
        let tmp = install_dir(&["Google Chrome.app"]);
        let found = find_bundle(tmp.path(), "google chrome").unwrap();
        assert_eq!(found.name, "Google Chrome");
    }

    #[test]
    fn test_find_bundle_not_found() {
        let tmp = install_dir(&["TestApp.app"]);
        let err = find_bundle(tmp.path(), "Other").unwrap_err();
        assert!(matches!(err, Error::BundleNotFound(name) if name == "Other"));
    }
}
