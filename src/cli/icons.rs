//! Icons command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::{icon_plan, write_assets};
use crate::discovery::Project;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Generate placeholder upgrade and magic icons
#[derive(Args, Debug)]
pub struct IconsArgs {
    /// Project root (holds pxgen.yaml)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: IconsArgs, printer: &Printer) -> Result<()> {
    let project = Project::open(&args.root)?;
    let out_dir = project.asset_root();

    for skipped in &project.manifest.icons.skip {
        printer.info("Skipped", &format!("{} (hand-drawn)", skipped));
    }

    let plan = icon_plan(&project.manifest)?;
    let count = write_assets(&out_dir, &plan, false, |path| {
        printer.status("Generated", &display_path(path));
    })?;

    printer.success("Finished", &plural(count, "icon", "icons"));
    Ok(())
}
