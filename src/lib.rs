pub mod api;
pub mod commands;
pub mod config;
pub mod guard;
pub mod session;
pub mod state;
pub mod store;
pub mod utils;

#[cfg(test)]
mod testing;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "maigen",
    about = "Interact with MaigenAI Hub via command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        long = "api-url",
        env = "API_URL",
        help = "Base URL of the MaigenAI Hub API",
        global = true
    )]
    pub api_url: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}
