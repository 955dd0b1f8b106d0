use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{format_projects, new_project};
use crate::api::types::{CurrentUser, UserType};
use crate::state::State;
use crate::utils::{split_list, text_or_prompt};

#[derive(Debug, Parser)]
#[clap(about = "Post a new project")]
#[group(skip)]
pub struct Options {
    #[clap(long = "title", help = "Title of the project")]
    pub title: Option<String>,
    #[clap(long = "description", help = "What the project is about")]
    pub description: Option<String>,
    #[clap(long = "budget", help = "Budget in euros")]
    pub budget: Option<f64>,
    #[clap(long = "timeline", help = "Expected timeline, e.g. `1 month`")]
    pub timeline: Option<String>,
    #[clap(
        short = 's',
        long = "skill",
        help = "Required skill, can be repeated or comma separated"
    )]
    pub skills: Vec<String>,
}

pub async fn handle(options: Options, state: State, user: &CurrentUser) -> Result<()> {
    ensure!(
        user.user_type == UserType::Company,
        "Only companies can create projects"
    );

    let title = text_or_prompt(options.title, "Title of the project")?;
    let description = text_or_prompt(options.description, "Description")?;

    let budget = match options.budget {
        Some(budget) => budget,
        None => dialoguer::Input::<f64>::new()
            .with_prompt("Budget (€)")
            .interact_text()?,
    };

    let timeline = text_or_prompt(options.timeline, "Timeline")?;

    let skills = if options.skills.is_empty() {
        split_list(&text_or_prompt(None, "Required skills (comma separated)")?)
    } else {
        options
            .skills
            .iter()
            .flat_map(|skill| split_list(skill))
            .collect()
    };

    let project = new_project(&user.email, &title, &description, budget, &timeline, &skills)?;

    let created = state.api.create_project(&project).await?;

    log::info!("Created project {}", format_projects(&[&created], false)[0]);

    Ok(())
}
