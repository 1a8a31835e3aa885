use clap::Parser;
use miette::Result;
use artgen::cli::{Cli, Commands};
use artgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Generate(args) => artgen::cli::generate::run(args, &printer)?,
        Commands::Noise(args) => artgen::cli::noise::run(args, &printer)?,
        Commands::Show(args) => artgen::cli::show::run(args, &printer)?,
        Commands::Eval(args) => artgen::cli::eval::run(args, &printer)?,
        Commands::Init(args) => artgen::cli::init::run(args, &printer)?,
        Commands::Completions(args) => artgen::cli::completions::run(args)?,
    }

    Ok(())
}
