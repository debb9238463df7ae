//! Opaque command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Project;
use crate::error::Result;
use crate::normalize::{normalize_opacity, OpacityOutcome};
use crate::output::{display_path, plural, Printer};

/// Force full opacity on every visible pixel of every PNG
#[derive(Args, Debug)]
pub struct OpaqueArgs {
    /// Directory to scan (default: the manifest's asset root)
    pub path: Option<PathBuf>,

    /// Project root (holds pxgen.yaml)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: OpaqueArgs, printer: &Printer) -> Result<()> {
    let project = Project::open(&args.root)?;
    let dir = args.path.unwrap_or_else(|| project.asset_root());

    if !dir.is_dir() {
        printer.warning(
            "Warning",
            &format!("asset directory does not exist: {}", display_path(&dir)),
        );
        return Ok(());
    }

    let report = normalize_opacity(&dir, &project.manifest);

    for (path, outcome) in &report.entries {
        match outcome {
            OpacityOutcome::Normalized { changed: 0 } => {
                printer.status("Checked", &display_path(path))
            }
            OpacityOutcome::Normalized { changed } => printer.status(
                "Normalized",
                &format!("{} ({})", display_path(path), plural(*changed, "pixel", "pixels")),
            ),
            OpacityOutcome::Skipped(message) => printer.warning(
                "Skipped",
                &format!("{}: {}", display_path(path), message),
            ),
        }
    }

    printer.success(
        "Finished",
        &format!(
            "processed {}, skipped {}, {} made opaque",
            plural(report.processed(), "PNG file", "PNG files"),
            report.skipped(),
            plural(report.changed_pixels(), "pixel", "pixels")
        ),
    );
    Ok(())
}
