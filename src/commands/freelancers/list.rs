use anyhow::Result;
use clap::Parser;

use super::utils::format_freelancers;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all freelancers")]
pub struct Options {
    #[clap(long = "skill", help = "Only show freelancers with this skill")]
    pub skill: Option<String>,

    #[clap(short = 'q', long = "quiet", help = "Only print freelancer emails")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: State) -> Result<()> {
    let mut freelancers = state.api.list_freelancers().await?;

    if let Some(skill) = options.skill.as_deref() {
        freelancers.retain(|f| f.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)));
    }

    if options.quiet {
        let emails = freelancers
            .iter()
            .map(|f| f.email.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{emails}");
    } else if freelancers.is_empty() {
        log::info!("No freelancers found");
    } else {
        println!("{}", format_freelancers(&freelancers, true).join("\n"));
    }

    Ok(())
}
