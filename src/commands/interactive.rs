//! Interactive mode: pick an application, then choose what goes with it

use anyhow::Result;
use dialoguer::{Confirm, Select};
use leftovers::{DeletionPlanner, DeletionSummary, Selection};
use std::path::Path;

use super::report::{self, OutcomePrinter};
use crate::Context;
use crate::ui;

/// How to treat the associated items once the bundle is going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssociatedChoice {
    Keep,
    AskEach,
    All,
}

impl AssociatedChoice {
    const OPTIONS: [AssociatedChoice; 3] = [
        AssociatedChoice::Keep,
        AssociatedChoice::AskEach,
        AssociatedChoice::All,
    ];

    fn label(self) -> &'static str {
        match self {
            AssociatedChoice::Keep => "No, keep them",
            AssociatedChoice::AskEach => "Yes, ask for each item",
            AssociatedChoice::All => "All",
        }
    }
}

pub fn run(ctx: &Context) -> Result<DeletionSummary> {
    let bundles = super::installed_bundles(&ctx.apps_dir)?;
    if bundles.is_empty() {
        ui::warn(&format!("No applications in {}", ctx.apps_dir.display()));
        return Ok(DeletionSummary::default());
    }

    let mut items: Vec<&str> = bundles.iter().map(|b| b.name.as_str()).collect();
    items.push("Exit");

    let picked = Select::new()
        .with_prompt("Select an application to delete")
        .items(&items)
        .default(0)
        .interact_opt()?;

    let bundle = match picked {
        Some(i) if i < bundles.len() => &bundles[i],
        _ => {
            println!("Exiting.");
            return Ok(DeletionSummary::default());
        }
    };

    let scanner = ctx.scanner();
    let (identity, record) = super::scan_with_spinner(&scanner, bundle);
    report::print_scan(&identity, &record);

    println!();
    if !Confirm::new()
        .with_prompt("Delete this application?")
        .default(false)
        .interact()?
    {
        println!("Cancelled.");
        return Ok(DeletionSummary::default());
    }

    let choice = if record.is_empty() {
        AssociatedChoice::Keep
    } else {
        let labels: Vec<_> = AssociatedChoice::OPTIONS.iter().map(|c| c.label()).collect();
        let index = Select::new()
            .with_prompt("Delete associated items?")
            .items(&labels)
            .default(0)
            .interact()?;
        AssociatedChoice::OPTIONS[index]
    };

    let selection = match choice {
        AssociatedChoice::Keep => Selection::None,
        AssociatedChoice::All => Selection::All,
        AssociatedChoice::AskEach => Selection::per_item(confirm_item),
    };

    let actions = DeletionPlanner::new(ctx.dry_run).plan(&identity.bundle_path, &record, selection);

    println!();
    let outcomes = leftovers::execute_with_progress(&actions, &mut OutcomePrinter);
    let summary = DeletionSummary::from_outcomes(&outcomes);
    report::print_summary(&summary, ctx.dry_run);

    println!();
    ui::success("Done!");
    Ok(summary)
}

/// Ask about a single artifact; a failed prompt keeps the file.
fn confirm_item(path: &Path) -> bool {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    match Confirm::new()
        .with_prompt(format!("Delete {name}?"))
        .default(false)
        .interact()
    {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("Prompt failed, keeping {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_labels_are_distinct() {
        let labels: Vec<_> = AssociatedChoice::OPTIONS.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], "No, keep them");
        assert_ne!(labels[1], labels[2]);
    }
}
