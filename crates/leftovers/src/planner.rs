//! Deletion planner - turns a selection into an ordered action list
//!
//! Pure sequencing: the planner never looks at the filesystem.

use std::path::Path;

use crate::types::{ArtifactRecord, DeletionAction, DeletionMode};

/// Which associated artifacts to remove alongside the bundle.
pub enum Selection<'a> {
    /// Only the bundle itself
    None,
    /// Every artifact in the record
    All,
    /// Ask the callback for each artifact; `true` keeps it in the plan
    PerItem(Box<dyn FnMut(&Path) -> bool + 'a>),
}

impl<'a> Selection<'a> {
    /// Convenience constructor for per-item decisions
    pub fn per_item(decide: impl FnMut(&Path) -> bool + 'a) -> Self {
        Selection::PerItem(Box::new(decide))
    }
}

/// Sequences deletion actions for one application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeletionPlanner {
    dry_run: bool,
}

impl DeletionPlanner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn mode(&self) -> DeletionMode {
        if self.dry_run {
            DeletionMode::DryRun
        } else {
            DeletionMode::Execute
        }
    }

    /// Plan the removal of `bundle` and the selected artifacts.
    ///
    /// The bundle always comes first. Artifacts follow in category
    /// declaration order, then listing order within a category.
    pub fn plan(
        &self,
        bundle: &Path,
        record: &ArtifactRecord,
        selection: Selection<'_>,
    ) -> Vec<DeletionAction> {
        let mode = self.mode();
        let action = |path: &Path| DeletionAction {
            path: path.to_path_buf(),
            mode,
        };

        let mut actions = vec![action(bundle)];

        match selection {
            Selection::None => {}
            Selection::All => {
                actions.extend(record.paths().map(|(_, path)| action(path)));
            }
            Selection::PerItem(mut decide) => {
                for (_, path) in record.paths() {
                    if decide(path) {
                        actions.push(action(path));
                    }
                }
            }
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::path::PathBuf;

    fn record() -> ArtifactRecord {
        let mut record = ArtifactRecord::new();
        record.push(Category::Fonts, PathBuf::from("/Library/Fonts/TestApp.ttf"));
        record.push(Category::Preferences, PathBuf::from("/prefs/com.test.app.plist"));
        record.push(Category::Caches, PathBuf::from("/caches/com.test.app"));
        record
    }

    fn paths(actions: &[DeletionAction]) -> Vec<PathBuf> {
        actions.iter().map(|a| a.path.clone()).collect()
    }

    const BUNDLE: &str = "/Applications/TestApp.app";

    #[test]
    fn test_none_plans_bundle_only() {
        let actions = DeletionPlanner::new(false).plan(Path::new(BUNDLE), &record(), Selection::None);
        assert_eq!(paths(&actions), vec![PathBuf::from(BUNDLE)]);
        assert_eq!(actions[0].mode, DeletionMode::Execute);
    }

    #[test]
    fn test_all_follows_category_order() {
        let actions = DeletionPlanner::new(false).plan(Path::new(BUNDLE), &record(), Selection::All);
        assert_eq!(
            paths(&actions),
            vec![
                PathBuf::from(BUNDLE),
                PathBuf::from("/prefs/com.test.app.plist"),
                PathBuf::from("/caches/com.test.app"),
                PathBuf::from("/Library/Fonts/TestApp.ttf"),
            ]
        );
    }

    #[test]
    fn test_per_item_asks_in_order_and_keeps_approved() {
        let mut asked = Vec::new();
        let actions = DeletionPlanner::new(false).plan(
            Path::new(BUNDLE),
            &record(),
            Selection::per_item(|path| {
                asked.push(path.to_path_buf());
                path.starts_with("/caches")
            }),
        );

        assert_eq!(
            paths(&actions),
            vec![PathBuf::from(BUNDLE), PathBuf::from("/caches/com.test.app")]
        );
        assert_eq!(asked.len(), 3);
        assert_eq!(asked[0], PathBuf::from("/prefs/com.test.app.plist"));
    }

    #[test]
    fn test_dry_run_marks_every_action() {
        let actions = DeletionPlanner::new(true).plan(Path::new(BUNDLE), &record(), Selection::All);
        assert_eq!(actions.len(), 4);
        assert!(actions.iter().all(|a| a.mode == DeletionMode::DryRun));
    }
}
