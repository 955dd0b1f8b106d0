use anyhow::{Context, Result};
use clap::Parser;

use super::utils::{email_or_prompt, password_or_prompt};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Login to MaigenAI Hub")]
pub struct Options {
    #[clap(long = "email", help = "Email")]
    pub email: Option<String>,
    #[clap(
        long = "password",
        help = "Password",
        long_help = "Password, prompted for when omitted"
    )]
    pub password: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let email = email_or_prompt(options.email)?;
    let password = password_or_prompt(options.password, false)?;

    let response = state
        .api
        .login(&email, &password)
        .await
        .context("Error while logging in")?;

    state.session.set_credential(&response.token).await?;

    log::info!("Logged in as: `{}` ({})", email, response.user_type);

    Ok(())
}
