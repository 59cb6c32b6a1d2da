use anyhow::Result;
use clap::Parser;
use wavedump::{Cli, Commands, Verbosity};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Dump(args) => wavedump::commands::dump::run(args, verbosity),
        Commands::Inspect(args) => wavedump::commands::inspect::run(args, verbosity),
        Commands::Completions(args) => {
            wavedump::commands::completions::run(args);
            Ok(())
        }
    }
}
