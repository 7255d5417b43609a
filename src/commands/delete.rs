//! Non-interactive removal of one application and all of its artifacts

use anyhow::{Context as AnyhowContext, Result};
use leftovers::{DeletionPlanner, DeletionSummary, Selection};

use super::report::{self, OutcomePrinter};
use crate::Context;
use crate::ui;

/// Delete the named application and everything found for it.
///
/// Returns the summary so the caller can set the exit status.
pub fn run(ctx: &Context, name: &str) -> Result<DeletionSummary> {
    let bundle = leftovers::find_bundle(&ctx.apps_dir, name)
        .with_context(|| format!("Cannot delete {name}"))?;

    let scanner = ctx.scanner();
    let (identity, record) = super::scan_with_spinner(&scanner, &bundle);
    report::print_scan(&identity, &record);

    if !ctx.dry_run && !ctx.yes && !confirm_delete(&identity.name, record.len())? {
        println!();
        ui::warn("Cancelled.");
        return Ok(DeletionSummary::default());
    }

    let actions =
        DeletionPlanner::new(ctx.dry_run).plan(&identity.bundle_path, &record, Selection::All);

    println!();
    let outcomes = leftovers::execute_with_progress(&actions, &mut OutcomePrinter);
    let summary = DeletionSummary::from_outcomes(&outcomes);
    report::print_summary(&summary, ctx.dry_run);

    Ok(summary)
}

fn confirm_delete(name: &str, artifacts: usize) -> Result<bool> {
    use dialoguer::Confirm;

    println!();
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Delete {name} and {artifacts} associated items? This cannot be undone"
        ))
        .default(false)
        .interact()?;

    Ok(confirmed)
}
