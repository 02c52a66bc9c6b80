pub mod build;
pub mod completions;
pub mod parse;
pub mod validate;

use clap::{Parser, Subcommand};

/// portfoliodb - Structured data from folders of project descriptions
#[derive(Parser, Debug)]
#[command(name = "portfoliodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse every project of a database and write JSON
    Build(build::BuildArgs),

    /// Check a database without writing anything
    Validate(validate::ValidateArgs),

    /// Parse a single description file and print its JSON
    Parse(parse::ParseArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
