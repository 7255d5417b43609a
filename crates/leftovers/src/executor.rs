//! Deletion executor - applies actions one by one
//!
//! Actions run strictly in order. A failed removal is recorded and the batch
//! continues; nothing is rolled back.

use std::io;
use std::path::Path;

use crate::types::{DeletionAction, DeletionMode, DeletionOutcome, DeletionResult};

/// Progress callback for deletion batches
pub trait ProgressCallback {
    /// Called once before the first action
    fn on_start(&mut self, total: usize);

    /// Called after each action with its outcome
    fn on_outcome(&mut self, outcome: &DeletionOutcome);
}

/// No-op progress callback
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_start(&mut self, _total: usize) {}
    fn on_outcome(&mut self, _outcome: &DeletionOutcome) {}
}

/// Apply every action, returning one outcome per action in input order.
pub fn execute(actions: &[DeletionAction]) -> Vec<DeletionOutcome> {
    execute_with_progress(actions, &mut NoProgress)
}

/// Like [`execute`], reporting each outcome as it happens.
pub fn execute_with_progress<P: ProgressCallback>(
    actions: &[DeletionAction],
    progress: &mut P,
) -> Vec<DeletionOutcome> {
    progress.on_start(actions.len());

    let mut outcomes = Vec::with_capacity(actions.len());
    for action in actions {
        let result = match action.mode {
            DeletionMode::DryRun => DeletionResult::WouldDelete,
            DeletionMode::Execute => match remove_path(&action.path) {
                Ok(()) => DeletionResult::Deleted,
                Err(e) => {
                    log::debug!("Failed to delete {}: {}", action.path.display(), e);
                    DeletionResult::Failed {
                        reason: e.to_string(),
                    }
                }
            },
        };

        let outcome = DeletionOutcome {
            path: action.path.clone(),
            result,
        };
        progress.on_outcome(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}

/// Recursive remove that treats an absent path as success.
///
/// Symlinks are removed themselves, never followed.
fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let removed = if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match removed {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
