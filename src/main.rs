use clap::Parser;
use miette::Result;
use ninepatch::cli::{Cli, Commands};
use ninepatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Inspect(args) => ninepatch::cli::inspect::run(args, &printer)?,
        Commands::Check(args) => ninepatch::cli::check::run(args, &printer)?,
        Commands::Compile(args) => ninepatch::cli::compile::run(args, &printer)?,
        Commands::Completions(args) => ninepatch::cli::completions::run(args)?,
    }

    Ok(())
}
