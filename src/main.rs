use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => swatch::cli::generate::run(args, &printer)?,
        Commands::Build(args) => swatch::cli::build::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
