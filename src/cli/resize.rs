//! Resize command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::Project;
use crate::error::Result;
use crate::normalize::{resize_files, ResizeOutcome};
use crate::output::Printer;

/// Resize icon files to a fixed square size
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Project root (holds pxgen.yaml)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Target edge length in pixels (default: manifest, then 96)
    #[arg(long)]
    pub size: Option<u32>,
}

pub fn run(args: ResizeArgs, printer: &Printer) -> Result<()> {
    let project = Project::open(&args.root)?;
    let size = args.size.unwrap_or(project.manifest.resize.size).max(1);
    let files = project.manifest.resize_files();

    let report = resize_files(&project.root, &files, size);

    for (rel, outcome) in &report.entries {
        match outcome {
            ResizeOutcome::Resized { from } => printer.status(
                "Resized",
                &format!("{} ({}x{} -> {}x{})", rel, from.0, from.1, size, size),
            ),
            ResizeOutcome::AlreadySized => {
                printer.info("Skipped", &format!("{} (already {}x{})", rel, size, size))
            }
            ResizeOutcome::Missing => printer.warning("Skipped", &format!("{} (not found)", rel)),
            ResizeOutcome::Failed(message) => {
                printer.warning("Skipped", &format!("{}: {}", rel, message))
            }
        }
    }

    printer.success(
        "Finished",
        &format!("resized {}, skipped {}", report.resized(), report.skipped()),
    );
    Ok(())
}
