use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::CompanySize;
use crate::api::types::{CompanyProfile, CurrentUser, UserType};
use crate::state::State;
use crate::utils::text_or_prompt;

#[derive(Debug, Parser)]
#[clap(about = "Create or update your company profile")]
#[group(skip)]
pub struct Options {
    #[clap(long = "name", help = "Company name")]
    pub name: Option<String>,
    #[clap(long = "description", help = "What the company does")]
    pub description: Option<String>,
    #[clap(long = "industry", help = "Industry")]
    pub industry: Option<String>,
    #[clap(long = "size", value_enum, help = "Number of employees")]
    pub size: Option<CompanySize>,
    #[clap(long = "location", help = "Where the company is based")]
    pub location: Option<String>,
}

pub async fn handle(options: Options, state: State, user: &CurrentUser) -> Result<()> {
    ensure!(
        user.user_type == UserType::Company,
        "Only companies can create a company profile"
    );

    let name = text_or_prompt(options.name, "Company name")?;
    let description = text_or_prompt(options.description, "Description")?;
    let industry = text_or_prompt(options.industry, "Industry")?;

    let size = match options.size {
        Some(size) => size,
        None => {
            let idx = dialoguer::Select::new()
                .with_prompt("Company size")
                .items(&CompanySize::ALL)
                .default(0)
                .interact()?;

            CompanySize::ALL[idx]
        }
    };

    let location = text_or_prompt(options.location, "Location")?;

    ensure!(!name.trim().is_empty(), "Company name is required");

    let company = CompanyProfile {
        name,
        description,
        industry,
        size: size.as_str().to_string(),
        location,
        email: user.email.clone(),
        user_type: UserType::Company,
    };

    let saved = state.api.create_company(&company).await?;

    log::info!("Saved company profile for `{}` ({})", saved.name, user.email);

    Ok(())
}
