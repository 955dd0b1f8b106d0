use anyhow::{ensure, Result};
use clap::Parser;

use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current user")]
pub struct Options {}

pub async fn handle(_options: &Options, state: State) -> Result<()> {
    ensure!(
        state.session.is_signed_in().await,
        "You are not logged in. Please run `{} auth login` first.",
        EXEC_NAME
    );

    state.session.clear_credential().await?;

    log::info!("You have been logged out");

    Ok(())
}
