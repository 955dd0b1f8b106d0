use anyhow::Result;
use clap::Parser;

use super::utils::{format_projects, user_projects};
use crate::api::types::{CurrentUser, UserType};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List projects")]
pub struct Options {
    #[clap(short = 'm', long = "mine", help = "Only show your own projects")]
    pub mine: bool,

    #[clap(short = 'q', long = "quiet", help = "Only print project titles")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: State, user: &CurrentUser) -> Result<()> {
    let projects = state.api.list_projects().await?;

    let mine = user_projects(&projects, user);
    let all = projects.iter().collect::<Vec<_>>();

    let shown = if options.mine { &mine } else { &all };

    if options.quiet {
        let titles = shown
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        println!("{titles}");

        return Ok(());
    }

    if shown.is_empty() {
        log::info!("No projects found");
    } else {
        println!("{}", format_projects(shown, true).join("\n"));
    }

    if !options.mine {
        let whose = match user.user_type {
            UserType::Company => "posted by you",
            UserType::Freelancer => "assigned to you",
        };

        log::info!("{} of {} projects {whose}", mine.len(), projects.len());
    }

    Ok(())
}
