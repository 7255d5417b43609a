use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix carried by every application bundle directory.
pub const BUNDLE_SUFFIX: &str = ".app";

/// An installed application bundle found in an installation directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEntry {
    /// Bundle name with the `.app` suffix stripped
    pub name: String,
    /// Full path to the bundle directory
    pub path: PathBuf,
}

/// The application being uninstalled.
///
/// Built once per scan request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationIdentity {
    /// Display name, e.g. "Google Chrome"
    pub name: String,
    /// Path to the `.app` bundle
    pub bundle_path: PathBuf,
    /// Identifier read from the bundle metadata, if any
    pub bundle_identifier: Option<String>,
}

impl ApplicationIdentity {
    /// Create an identity. Blank identifiers are treated as absent.
    pub fn new(
        name: impl Into<String>,
        bundle_path: impl Into<PathBuf>,
        bundle_identifier: Option<String>,
    ) -> Self {
        let bundle_identifier = bundle_identifier
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Self {
            name: name.into(),
            bundle_path: bundle_path.into(),
            bundle_identifier,
        }
    }

    /// The identifier used for matching: the resolved one, or the name
    /// with all whitespace removed.
    pub fn identifier(&self) -> Cow<'_, str> {
        match &self.bundle_identifier {
            Some(id) => Cow::Borrowed(id.as_str()),
            None => Cow::Owned(fallback_identifier(&self.name)),
        }
    }

    /// Whether matching falls back to the name-derived identifier
    pub fn is_fallback(&self) -> bool {
        self.bundle_identifier.is_none()
    }
}

/// Derive an identifier from an application name by dropping whitespace.
///
/// `"Google Chrome"` becomes `"GoogleChrome"`.
pub fn fallback_identifier(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Kind of artifact an application leaves behind.
///
/// Declaration order is the order used for reporting and deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Preferences,
    ApplicationSupport,
    Caches,
    Logs,
    SavedState,
    Containers,
    ControlPanels,
    StartupItems,
    QuickLook,
    ScreenSavers,
    InputMethods,
    Fonts,
}

impl Category {
    /// Every category in declaration order
    pub const ALL: [Category; 12] = [
        Category::Preferences,
        Category::ApplicationSupport,
        Category::Caches,
        Category::Logs,
        Category::SavedState,
        Category::Containers,
        Category::ControlPanels,
        Category::StartupItems,
        Category::QuickLook,
        Category::ScreenSavers,
        Category::InputMethods,
        Category::Fonts,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Preferences => "Preferences",
            Category::ApplicationSupport => "Application Support",
            Category::Caches => "Caches",
            Category::Logs => "Logs",
            Category::SavedState => "Saved Application State",
            Category::Containers => "Containers",
            Category::ControlPanels => "Control Panels",
            Category::StartupItems => "Startup Items",
            Category::QuickLook => "QuickLook Plugins",
            Category::ScreenSavers => "Screen Savers",
            Category::InputMethods => "Input Methods",
            Category::Fonts => "Fonts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Artifacts found for one application, grouped by category.
///
/// Every category is present; categories without matches hold an empty list.
/// Paths keep directory-listing order within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    categories: BTreeMap<Category, Vec<PathBuf>>,
}

impl ArtifactRecord {
    /// Create a record with every category empty
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }

    /// Paths recorded for a category
    pub fn get(&self, category: Category) -> &[PathBuf] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn push(&mut self, category: Category, path: PathBuf) {
        self.categories.entry(category).or_default().push(path);
    }

    pub(crate) fn contains(&self, category: Category, path: &Path) -> bool {
        self.get(category).iter().any(|p| p == path)
    }

    /// Iterate categories in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[PathBuf])> {
        self.categories.iter().map(|(c, paths)| (*c, paths.as_slice()))
    }

    /// Every path, category by category
    pub fn paths(&self) -> impl Iterator<Item = (Category, &Path)> {
        self.iter()
            .flat_map(|(c, paths)| paths.iter().map(move |p| (c, p.as_path())))
    }

    /// Total number of artifacts
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// True when no artifact was found in any category
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }
}

impl Default for ArtifactRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings threaded into the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Home directory holding the per-user `Library`
    pub home_directory: PathBuf,
    /// Root under which system-wide `Library` locations live (normally `/`)
    pub system_root: PathBuf,
    /// Report the resolved identifier at info level
    pub verbose: bool,
    /// Drop repeated paths within a category
    pub dedupe: bool,
}

impl ScanConfig {
    /// Config for the given home directory with the real system root
    pub fn new(home_directory: impl Into<PathBuf>) -> Self {
        Self {
            home_directory: home_directory.into(),
            system_root: PathBuf::from("/"),
            verbose: false,
            dedupe: true,
        }
    }

    /// Use a different system root
    pub fn with_system_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.system_root = root.into();
        self
    }

    /// Set verbosity
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable per-category deduplication
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }
}

/// Whether an action touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionMode {
    DryRun,
    Execute,
}

/// One path to remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionAction {
    pub path: PathBuf,
    pub mode: DeletionMode,
}

/// What happened to a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionResult {
    /// Path was removed, or was already gone
    Deleted,
    /// Dry run: the path would have been removed
    WouldDelete,
    /// Removal failed
    Failed { reason: String },
}

/// Outcome of one action, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionOutcome {
    pub path: PathBuf,
    pub result: DeletionResult,
}

impl DeletionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.result, DeletionResult::Failed { .. })
    }
}

/// Counts over a batch of outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionSummary {
    pub deleted: usize,
    pub would_delete: usize,
    pub failed: usize,
}

impl DeletionSummary {
    /// Fold a batch of outcomes into counts
    pub fn from_outcomes(outcomes: &[DeletionOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.add(&outcome.result);
        }
        summary
    }

    pub fn add(&mut self, result: &DeletionResult) {
        match result {
            DeletionResult::Deleted => self.deleted += 1,
            DeletionResult::WouldDelete => self.would_delete += 1,
            DeletionResult::Failed { .. } => self.failed += 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
