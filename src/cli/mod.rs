pub mod completions;
pub mod export;
pub mod icons;
pub mod opaque;
pub mod resize;

use clap::{Parser, Subcommand};

/// pxgen - Procedural pixel-art asset generator
#[derive(Parser, Debug)]
#[command(name = "pxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sprites, sheets, tiles and the terrain atlas
    Export(export::ExportArgs),

    /// Generate placeholder upgrade and magic icons
    Icons(icons::IconsArgs),

    /// Resize icon files to a fixed square size
    Resize(resize::ResizeArgs),

    /// Force full opacity on every visible pixel of every PNG
    Opaque(opaque::OpaqueArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
