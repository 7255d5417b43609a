use anyhow::Result;

use crate::Context;
use crate::ui;

/// List installed applications
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let bundles = super::installed_bundles(&ctx.apps_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bundles)?);
        return Ok(());
    }

    ui::header("Installed Applications");
    for (i, bundle) in bundles.iter().enumerate() {
        println!("{}. {}", i + 1, bundle.name);
    }

    if bundles.is_empty() && !ctx.quiet {
        ui::dim(&format!("No applications in {}", ctx.apps_dir.display()));
    }

    Ok(())
}
