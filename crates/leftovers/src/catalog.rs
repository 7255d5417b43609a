//! Fixed table of macOS locations where application artifacts live
//!
//! Two groups:
//! - direct paths: `<dir>/<identifier><suffix>`, checked for existence only
//! - listings: every entry of `<dir>` tested against a [`Rule`]

use std::path::PathBuf;

use crate::matcher::Rule;
use crate::types::{Category, ScanConfig};

/// Whether a location lives under the user's home or the system root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    System,
}

impl Scope {
    fn base(self, config: &ScanConfig) -> PathBuf {
        match self {
            Scope::User => config.home_directory.clone(),
            Scope::System => config.system_root.clone(),
        }
    }
}

/// A candidate built from the identifier and checked for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectPath {
    pub category: Category,
    pub dir: &'static str,
    pub suffix: &'static str,
}

impl DirectPath {
    /// Full candidate path for an identifier
    pub fn candidate(&self, config: &ScanConfig, identifier: &str) -> PathBuf {
        Scope::User
            .base(config)
            .join(self.dir)
            .join(format!("{identifier}{}", self.suffix))
    }
}

/// A directory whose entries are tested against a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub category: Category,
    pub scope: Scope,
    pub dir: &'static str,
    pub rule: Rule,
}

impl Listing {
    /// Directory to list
    pub fn directory(&self, config: &ScanConfig) -> PathBuf {
        self.scope.base(config).join(self.dir)
    }
}

const PREFERENCES: &str = "Library/Preferences";
const APPLICATION_SUPPORT: &str = "Library/Application Support";
const CACHES: &str = "Library/Caches";
const LOGS: &str = "Library/Logs";
const SAVED_STATE: &str = "Library/Saved Application State";
const CONTAINERS: &str = "Library/Containers";
const PREFERENCE_PANES: &str = "Library/PreferencePanes";
const LAUNCH_AGENTS: &str = "Library/LaunchAgents";
const LAUNCH_DAEMONS: &str = "Library/LaunchDaemons";
const QUICK_LOOK: &str = "Library/QuickLook";
const SCREEN_SAVERS: &str = "Library/Screen Savers";
const INPUT_METHODS: &str = "Library/Input Methods";
const FONTS: &str = "Library/Fonts";

/// Per-user locations keyed directly by the bundle identifier
pub const DIRECT_PATHS: &[DirectPath] = &[
    DirectPath {
        category: Category::Preferences,
        dir: PREFERENCES,
        suffix: ".plist",
    },
    DirectPath {
        category: Category::Preferences,
        dir: PREFERENCES,
        suffix: "",
    },
    DirectPath {
        category: Category::ApplicationSupport,
        dir: APPLICATION_SUPPORT,
        suffix: "",
    },
    DirectPath {
        category: Category::Caches,
        dir: CACHES,
        suffix: "",
    },
    DirectPath {
        category: Category::Logs,
        dir: LOGS,
        suffix: "",
    },
    DirectPath {
        category: Category::SavedState,
        dir: SAVED_STATE,
        suffix: ".savedState",
    },
    DirectPath {
        category: Category::Containers,
        dir: CONTAINERS,
        suffix: "",
    },
];

const fn listing(category: Category, scope: Scope, dir: &'static str, rule: Rule) -> Listing {
    Listing {
        category,
        scope,
        dir,
        rule,
    }
}

/// Directories whose entries are matched against the application
pub const LISTINGS: &[Listing] = &[
    listing(Category::Preferences, Scope::User, PREFERENCES, Rule::IdentifierPrefix),
    listing(Category::ApplicationSupport, Scope::User, APPLICATION_SUPPORT, Rule::NameContains),
    listing(Category::Caches, Scope::User, CACHES, Rule::NameContains),
    listing(Category::ControlPanels, Scope::User, PREFERENCE_PANES, Rule::NameContains),
    listing(Category::ControlPanels, Scope::System, PREFERENCE_PANES, Rule::NameContains),
    listing(Category::StartupItems, Scope::User, LAUNCH_AGENTS, Rule::NameOrIdentifierContains),
    listing(Category::StartupItems, Scope::System, LAUNCH_AGENTS, Rule::NameOrIdentifierContains),
    listing(Category::StartupItems, Scope::User, LAUNCH_DAEMONS, Rule::NameOrIdentifierContains),
    listing(Category::StartupItems, Scope::System, LAUNCH_DAEMONS, Rule::NameOrIdentifierContains),
    listing(Category::QuickLook, Scope::User, QUICK_LOOK, Rule::NameContains),
    listing(Category::QuickLook, Scope::System, QUICK_LOOK, Rule::NameContains),
    listing(Category::ScreenSavers, Scope::User, SCREEN_SAVERS, Rule::NameContains),
    listing(Category::InputMethods, Scope::User, INPUT_METHODS, Rule::NameContains),
    listing(Category::InputMethods, Scope::System, INPUT_METHODS, Rule::NameContains),
    listing(Category::Fonts, Scope::User, FONTS, Rule::NameContains),
    listing(Category::Fonts, Scope::System, FONTS, Rule::NameContains),
];
