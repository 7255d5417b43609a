//! Filename predicates used by the catalog rules
//!
//! No fuzzy matching: a short application name can match unrelated entries,
//! which is why every match is shown to the user before deletion.

/// Entry name equals `target` exactly (case-sensitive).
pub fn exact_name(entry: &str, target: &str) -> bool {
    entry == target
}

/// Entry name starts with `prefix` (case-sensitive).
pub fn prefix_match(entry: &str, prefix: &str) -> bool {
    entry.starts_with(prefix)
}

/// Entry name contains `needle`, ignoring case.
///
/// A blank needle never matches, otherwise a nameless application would
/// claim every entry in the directory.
pub fn contains_fold(entry: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return false;
    }
    entry.to_lowercase().contains(&needle.to_lowercase())
}

/// How a listed directory entry is tested against an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Name starts with the bundle identifier
    IdentifierPrefix,
    /// Name contains the application name, ignoring case
    NameContains,
    /// Name contains the application name or the bundle identifier, ignoring case
    NameOrIdentifierContains,
}

impl Rule {
    /// Apply the rule to one entry name
    pub fn matches(self, entry: &str, app_name: &str, identifier: &str) -> bool {
        match self {
            Rule::IdentifierPrefix => !identifier.is_empty() && prefix_match(entry, identifier),
            Rule::NameContains => contains_fold(entry, app_name),
            Rule::NameOrIdentifierContains => {
                contains_fold(entry, identifier) || contains_fold(entry, app_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_is_case_sensitive() {
        assert!(exact_name("com.test.app.plist", "com.test.app.plist"));
        assert!(!exact_name("com.Test.app.plist", "com.test.app.plist"));
    }

    #[test]
    fn test_prefix_match() {
        assert!(prefix_match("com.test.app.helper.plist", "com.test.app"));
        assert!(!prefix_match("group.com.test.app", "com.test.app"));
        assert!(!prefix_match("COM.TEST.APP.plist", "com.test.app"));
    }

    #[test]
    fn test_contains_fold_ignores_case() {
        assert!(contains_fold("TestApp Helper", "testapp"));
        assert!(contains_fold("com.vendor.TESTAPP.agent.plist", "TestApp"));
        assert!(!contains_fold("Other", "TestApp"));
    }

    #[test]
    fn test_contains_fold_blank_needle_never_matches() {
        assert!(!contains_fold("anything", ""));
        assert!(!contains_fold("Screen Savers", " "));
    }

    #[test]
    fn test_rules() {
        assert!(Rule::IdentifierPrefix.matches("com.test.app.plist", "TestApp", "com.test.app"));
        assert!(!Rule::IdentifierPrefix.matches("TestApp.plist", "TestApp", "com.test.app"));

        assert!(Rule::NameContains.matches("testapp-data", "TestApp", "com.test.app"));
        assert!(!Rule::NameContains.matches("com.test.app", "TestApp", "com.test.app"));

        let startup = Rule::NameOrIdentifierContains;
        assert!(startup.matches("COM.TEST.APP.agent.plist", "TestApp", "com.test.app"));
        assert!(startup.matches("testapp.updater.plist", "TestApp", "com.test.app"));
        assert!(!startup.matches("com.other.agent.plist", "TestApp", "com.test.app"));
    }
}
