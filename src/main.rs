#![warn(clippy::pedantic)]

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use maigen_cli::commands::handle_command;
use maigen_cli::config::TOKEN_ENV;
use maigen_cli::state::scope::PageScope;
use maigen_cli::state::{State, StateOptions};
use maigen_cli::{utils, CLI};

const CANCEL_GRACE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = match State::new(StateOptions {
        override_token: std::env::var(TOKEN_ENV).ok(),
        api_url: cli.api_url,
    })
    .await
    {
        Ok(state) => state,
        Err(error) => {
            log::error!("{:#}", error);
            std::process::exit(1);
        }
    };

    // the command is the "page", ctrl-c navigates away from it
    let scope = PageScope::new();
    let canceller = scope.canceller();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            canceller.cancel();

            // a blocking prompt never yields back to the scope
            tokio::time::sleep(CANCEL_GRACE).await;
            utils::clean_term();
            std::process::exit(130);
        }
    });

    match scope.run(handle_command(cli.commands, state)).await {
        Some(Ok(())) => {}

        Some(Err(error)) => {
            log::error!("{:#}", error);
            std::process::exit(1);
        }

        None => {
            utils::clean_term();
            log::warn!("Cancelled");
            std::process::exit(130);
        }
    }

    Ok(())
}
