use std::path::Path;

use crate::error::Result;

#[cfg(feature = "defaults")]
pub mod defaults;
pub mod info_plist;

/// Looks up the bundle identifier embedded in an application bundle.
///
/// This trait abstracts the underlying implementation, allowing us to:
/// - Read `Contents/Info.plist` directly
/// - Shell out to `defaults read`
/// - Mock for testing
pub trait IdentifierResolver: Send + Sync {
    /// Read the identifier, reporting why it is unavailable
    fn lookup(&self, bundle: &Path) -> Result<String>;

    /// Identifier for a bundle, or `None` on any failure.
    ///
    /// The returned string is trimmed but otherwise used verbatim.
    fn identifier_of(&self, bundle: &Path) -> Option<String> {
        match self.lookup(bundle) {
            Ok(id) => {
                let id = id.trim();
                (!id.is_empty()).then(|| id.to_string())
            }
            Err(e) => {
                log::debug!("No identifier for {}: {}", bundle.display(), e);
                None
            }
        }
    }
}

impl<F> IdentifierResolver for F
where
    F: Fn(&Path) -> Option<String> + Send + Sync,
{
    fn lookup(&self, bundle: &Path) -> Result<String> {
        self(bundle).ok_or_else(|| crate::Error::MissingIdentifier(bundle.to_path_buf()))
    }
}

/// Tries each resolver in turn; the first non-empty identifier wins.
pub struct ChainResolver {
    resolvers: Vec<Box<dyn IdentifierResolver>>,
}

impl ChainResolver {
    pub fn new(resolvers: Vec<Box<dyn IdentifierResolver>>) -> Self {
        Self { resolvers }
    }
}

impl IdentifierResolver for ChainResolver {
    fn lookup(&self, bundle: &Path) -> Result<String> {
        let mut last_err = None;
        for resolver in &self.resolvers {
            match resolver.lookup(bundle) {
                Ok(id) if !id.trim().is_empty() => return Ok(id),
                Ok(_) => {}
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| crate::Error::MissingIdentifier(bundle.to_path_buf())))
    }
}

/// Get the default resolver: Info.plist first, then `defaults read`.
pub fn default_resolver() -> ChainResolver {
    let mut resolvers: Vec<Box<dyn IdentifierResolver>> =
        vec![Box::new(info_plist::InfoPlistResolver)];
    #[cfg(feature = "defaults")]
    if defaults::DefaultsResolver::is_available() {
        resolvers.push(Box::new(defaults::DefaultsResolver));
    }
    ChainResolver::new(resolvers)
}
