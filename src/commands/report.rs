//! Shared rendering for scan reports and deletion outcomes

use colored::Colorize;
use leftovers::{
    ApplicationIdentity, ArtifactRecord, DeletionOutcome, DeletionResult, DeletionSummary,
    ProgressCallback,
};
use std::path::Path;
use walkdir::WalkDir;

use crate::ui;

/// Bytes used by a file or directory tree; unreadable entries count as zero.
pub fn path_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| !m.is_dir())
        .map(|m| m.len())
        .sum()
}

/// Print the application and everything found for it
pub fn print_scan(identity: &ApplicationIdentity, record: &ArtifactRecord) {
    println!();
    ui::kv("Selected", &identity.name.bold().to_string());
    ui::kv("Location", &identity.bundle_path.display().to_string());
    let id_note = if identity.is_fallback() {
        format!("{} {}", identity.identifier(), "(derived from name)".dimmed())
    } else {
        identity.identifier().into_owned()
    };
    ui::kv("Bundle ID", &id_note);

    let mut total = path_size(&identity.bundle_path);

    for (category, paths) in record.iter() {
        if paths.is_empty() {
            continue;
        }
        ui::section(&format!("{category}:"));
        for path in paths {
            let size = path_size(path);
            total += size;
            println!(
                "  - {} {}",
                path.display(),
                format!("({})", ui::format_size(size)).dimmed()
            );
        }
    }

    if record.is_empty() {
        println!();
        ui::dim("No associated items found.");
    }

    println!();
    ui::kv("Total", &ui::format_size(total));
}

/// Prints each outcome as the executor reports it
pub struct OutcomePrinter;

impl ProgressCallback for OutcomePrinter {
    fn on_start(&mut self, total: usize) {
        log::debug!("Applying {total} deletion actions");
    }

    fn on_outcome(&mut self, outcome: &DeletionOutcome) {
        let path = outcome.path.display();
        match &outcome.result {
            DeletionResult::Deleted => println!("  {} Deleted: {}", "✓".green(), path),
            DeletionResult::WouldDelete => println!("  {} Would delete: {}", "○".blue(), path),
            DeletionResult::Failed { reason } => {
                ui::error(&format!("Error deleting {path}: {reason}"));
            }
        }
    }
}

/// Print final summary
pub fn print_summary(summary: &DeletionSummary, dry_run: bool) {
    println!();
    if dry_run {
        ui::info("Dry run complete. No files were actually deleted.");
        return;
    }

    if summary.is_success() {
        ui::success(&format!("Removed {} items", summary.deleted));
    } else {
        ui::warn(&format!(
            "Removed {} items, {} {}",
            summary.deleted,
            summary.failed,
            "failed".red()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_size_of_tree() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("com.test.app");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("a.bin"), vec![0u8; 100]).unwrap();
        fs::write(dir.join("nested/b.bin"), vec![0u8; 28]).unwrap();

        assert_eq!(path_size(&dir), 128);
    }

    #[test]
    fn test_path_size_of_file_and_missing() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("com.test.app.plist");
        fs::write(&file, b"12345").unwrap();

        assert_eq!(path_size(&file), 5);
        assert_eq!(path_size(&tmp.path().join("missing")), 0);
    }
}
