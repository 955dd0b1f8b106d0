use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::config::EXEC_NAME;
use crate::CLI;

#[derive(Debug, Parser)]
#[clap(about = "Print a completion script for your shell")]
pub struct Options {
    #[clap(name = "shell", help = "Shell to generate the script for")]
    shell: Shell,
}

pub fn handle(options: &Options) {
    generate(
        options.shell,
        &mut CLI::command(),
        EXEC_NAME,
        &mut io::stdout().lock(),
    );
}
