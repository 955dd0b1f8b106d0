use anyhow::{ensure, Context, Result};
use clap::Parser;

use super::utils::format_matches;
use crate::api::types::{CurrentUser, UserType};
use crate::commands::projects::utils::user_projects;
use crate::state::State;

const DEFAULT_MIN_SCORE: f64 = 0.7;

#[derive(Debug, Parser)]
#[clap(about = "Find freelancers for one of your projects")]
pub struct Options {
    #[clap(name = "project", help = "Title of your project")]
    pub project: String,

    #[clap(
        long = "min-score",
        help = "Minimum score a freelancer needs",
        default_value_t = DEFAULT_MIN_SCORE
    )]
    pub min_score: f64,
}

pub async fn handle(options: &Options, state: State, user: &CurrentUser) -> Result<()> {
    ensure!(
        user.user_type == UserType::Company,
        "Only companies can match freelancers to their projects"
    );

    let projects = state.api.list_projects().await?;

    let project = user_projects(&projects, user)
        .into_iter()
        .find(|p| p.title.eq_ignore_ascii_case(options.project.trim()))
        .with_context(|| format!("You have no project titled `{}`", options.project))?;

    let matches = state.api.batch_match(project, options.min_score).await?;

    if matches.is_empty() {
        log::info!(
            "No freelancers scored at least {} for `{}`",
            options.min_score,
            project.title
        );
    } else {
        println!("{}", format_matches(&matches, true).join("\n"));
    }

    Ok(())
}
