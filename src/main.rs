use clap::Parser;
use miette::Result;
use portfoliodb::cli::{Cli, Commands};
use portfoliodb::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfoliodb=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => portfoliodb::cli::build::run(args, &printer)?,
        Commands::Validate(args) => portfoliodb::cli::validate::run(args, &printer)?,
        Commands::Parse(args) => portfoliodb::cli::parse::run(args, &printer)?,
        Commands::Completions(args) => portfoliodb::cli::completions::run(args)?,
    }

    Ok(())
}
