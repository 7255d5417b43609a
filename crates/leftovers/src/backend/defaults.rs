//! `defaults` backend implementation.
//!
//! Runs `defaults read <bundle>/Contents/Info CFBundleIdentifier`, which also
//! understands metadata the plist parser rejects.

use std::path::Path;
use std::process::Command;

use super::IdentifierResolver;
use crate::error::{Error, Result};

/// Resolver that shells out to macOS `defaults`.
pub struct DefaultsResolver;

impl DefaultsResolver {
    /// Check if `defaults` is available on this system.
    pub fn is_available() -> bool {
        Command::new("which")
            .arg("defaults")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl IdentifierResolver for DefaultsResolver {
    fn lookup(&self, bundle: &Path) -> Result<String> {
        // defaults takes the domain path without the .plist extension
        let domain = bundle.join("Contents").join("Info");

        let output = Command::new("defaults")
            .arg("read")
            .arg(&domain)
            .arg("CFBundleIdentifier")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::LookupFailed("defaults not found".to_string())
                } else {
                    Error::Io(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(Error::LookupFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}
