use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use super::utils::{email_or_prompt, password_or_prompt, user_type_or_prompt};
use crate::api::types::UserType;
use crate::state::State;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AccountType {
    Freelancer,
    Company,
}

impl From<AccountType> for UserType {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Freelancer => UserType::Freelancer,
            AccountType::Company => UserType::Company,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Create a new account")]
pub struct Options {
    #[clap(long = "email", help = "Email")]
    pub email: Option<String>,
    #[clap(
        long = "password",
        help = "Password",
        long_help = "Password, prompted for when omitted"
    )]
    pub password: Option<String>,
    #[clap(long = "type", value_enum, help = "Kind of account to create")]
    pub user_type: Option<AccountType>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let email = email_or_prompt(options.email)?;
    let password = password_or_prompt(options.password, true)?;
    let user_type = user_type_or_prompt(options.user_type.map(Into::into))?;

    let response = state
        .api
        .register(&email, &password, user_type)
        .await
        .context("Registration failed")?;

    state.session.set_credential(&response.token).await?;

    log::info!("Registered as: `{}` ({})", email, response.user_type);

    let next = match response.user_type {
        UserType::Freelancer => "freelancers create",
        UserType::Company => "companies create",
    };

    log::info!(
        "Complete your profile with `{} {}`",
        crate::config::EXEC_NAME,
        next
    );

    Ok(())
}
