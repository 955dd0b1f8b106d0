mod create;
mod list;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::types::CurrentUser;
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "create", alias = "new", alias = "profile")]
    Create(create::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Browse companies and manage your company profile")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State, user: CurrentUser) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(&options, state).await,
        Commands::Create(options) => create::handle(options, state, &user).await,
    }
}
