mod login;
mod logout;
mod register;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(login::Options),
    #[clap(alias = "signup")]
    Register(register::Options),
    Logout(logout::Options),
}

impl Commands {
    pub fn page(&self) -> &'static str {
        match self {
            Self::Login(_) => "/login",
            Self::Register(_) => "/register",
            Self::Logout(_) => "/",
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Authenticate with MaigenAI Hub")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Login(options) => login::handle(options, state).await,
        Commands::Register(options) => register::handle(options, state).await,
        Commands::Logout(options) => logout::handle(&options, state).await,
    }
}
