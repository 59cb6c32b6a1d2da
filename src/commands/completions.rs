use crate::Cli;
use clap::Args;
use clap_complete::{generate, Shell};
use std::io;

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) {
    let mut cmd = Cli::cmd();
    generate(args.shell, &mut cmd, "wavedump", &mut io::stdout());
}
