use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{validate_hourly_rate, PortfolioArg, DEFAULT_AVAILABILITY};
use crate::api::types::{CurrentUser, FreelancerProfile, UserType};
use crate::state::State;
use crate::utils::split_list;

#[derive(Debug, Parser)]
#[clap(about = "Create or update your freelancer profile")]
#[group(skip)]
pub struct Options {
    #[clap(long = "experience", help = "Short summary of your experience")]
    pub experience: Option<String>,
    #[clap(long = "skills", help = "Comma separated list of skills")]
    pub skills: Option<String>,
    #[clap(
        long = "portfolio",
        help = "Portfolio entry, can be repeated",
        long_help = "Portfolio entry as `title|description|url|tech1, tech2`, can be repeated"
    )]
    pub portfolio: Vec<PortfolioArg>,
    #[clap(long = "hourly-rate", help = "Hourly rate in euros")]
    pub hourly_rate: Option<f64>,
    #[clap(long = "availability", help = "Availability", default_value = DEFAULT_AVAILABILITY)]
    pub availability: String,
}

pub async fn handle(options: Options, state: State, user: &CurrentUser) -> Result<()> {
    ensure!(
        user.user_type == UserType::Freelancer,
        "Only freelancers can create a freelancer profile"
    );

    let experience = match options.experience {
        Some(experience) => experience,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Experience")
            .interact_text()?,
    };

    let skills = match options.skills {
        Some(skills) => split_list(&skills),
        None => split_list(
            &dialoguer::Input::<String>::new()
                .with_prompt("Skills (comma separated)")
                .allow_empty(true)
                .interact_text()?,
        ),
    };

    let profile = FreelancerProfile {
        experience,
        skills,
        portfolio: options.portfolio.into_iter().map(|item| item.0).collect(),
        hourly_rate: validate_hourly_rate(options.hourly_rate)?,
        availability: Some(options.availability),
        email: user.email.clone(),
        user_type: UserType::Freelancer,
    };

    let saved = state.api.create_freelancer_profile(&profile).await?;

    log::info!(
        "Saved profile for `{}` with {} skills and {} portfolio items",
        saved.email,
        saved.skills.len(),
        saved.portfolio.len()
    );

    Ok(())
}
