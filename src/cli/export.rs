//! Export command implementation.
//!
//! Renders the full export plan into the asset directory.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::{export_plan, write_assets};
use crate::discovery::Project;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Generate sprites, sheets, tiles and the terrain atlas
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Project root (holds pxgen.yaml)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output directory (default: the manifest's asset root)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write TexturePacker JSON for sheets and the atlas
    #[arg(long)]
    pub metadata: bool,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let project = Project::open(&args.root)?;
    let out_dir = args.output.unwrap_or_else(|| project.asset_root());
    let metadata = args.metadata || project.manifest.metadata;

    let plan = export_plan();
    let count = write_assets(&out_dir, &plan, metadata, |path| {
        printer.status("Generated", &display_path(path));
    })?;

    printer.success(
        "Finished",
        &format!(
            "{} exported to {}",
            plural(count, "asset", "assets"),
            printer.cyan(&display_path(&out_dir))
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_uses_manifest_asset_root() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("pxgen.yaml"), "assets: art\nmetadata: true\n").unwrap();

        let args = ExportArgs {
            root: dir.path().to_path_buf(),
            output: None,
            metadata: false,
        };
        run(args, &Printer::plain()).unwrap();

        assert!(dir.path().join("art/enemies/enemy_melee.png").is_file());
        assert!(dir.path().join("art/enemies/enemy_melee_sheet.json").is_file());
        assert!(dir.path().join("art/pickups/heal.png").is_file());
    }
}
