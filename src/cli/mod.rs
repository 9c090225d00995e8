pub mod build;
pub mod completions;
pub mod generate;

use clap::{Parser, Subcommand};

/// swatch - tonal colour swatch generator
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive a swatch from a base colour
    Generate(generate::GenerateArgs),

    /// Build every swatch in a theme definition file
    Build(build::BuildArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
