use clap::Parser;
use miette::Result;
use pxgen::cli::{Cli, Commands};
use pxgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Export(args) => pxgen::cli::export::run(args, &printer)?,
        Commands::Icons(args) => pxgen::cli::icons::run(args, &printer)?,
        Commands::Resize(args) => pxgen::cli::resize::run(args, &printer)?,
        Commands::Opaque(args) => pxgen::cli::opaque::run(args, &printer)?,
        Commands::Completions(args) => pxgen::cli::completions::run(args)?,
    }

    Ok(())
}
