mod batch;
mod list;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::types::CurrentUser;
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list", alias = "recommended")]
    List(list::Options),
    #[clap(name = "batch")]
    Batch(batch::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Match freelancers and projects")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State, user: CurrentUser) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(&options, state, &user).await,
        Commands::Batch(options) => batch::handle(&options, state, &user).await,
    }
}
