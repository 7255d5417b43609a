//! Reads `CFBundleIdentifier` straight from `Contents/Info.plist`.
//!
//! Handles both XML and binary plists, so no external tool is needed.

use std::path::Path;

use plist::Value;

use super::IdentifierResolver;
use crate::error::{Error, Result};

const IDENTIFIER_KEY: &str = "CFBundleIdentifier";

/// Resolver that parses the bundle's Info.plist.
pub struct InfoPlistResolver;

impl InfoPlistResolver {
    /// Location of the metadata file inside a bundle
    pub fn info_plist_path(bundle: &Path) -> std::path::PathBuf {
        bundle.join("Contents").join("Info.plist")
    }
}

impl IdentifierResolver for InfoPlistResolver {
    fn lookup(&self, bundle: &Path) -> Result<String> {
        let path = Self::info_plist_path(bundle);
        let value = Value::from_file(&path)?;

        match value.as_dictionary().and_then(|d| d.get(IDENTIFIER_KEY)) {
            Some(Value::String(id)) => Ok(id.clone()),
            _ => Err(Error::MissingIdentifier(path)),
        }
    }
}
