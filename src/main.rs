use clap::Parser;
use miette::Result;
use pxtrace::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Trace(args) => pxtrace::cli::trace::run(args)?,
        Commands::Inspect(args) => pxtrace::cli::inspect::run(args)?,
        Commands::Init(args) => pxtrace::cli::init::run(args)?,
        Commands::Completions(args) => pxtrace::cli::completions::run(args)?,
    }

    Ok(())
}
