use anyhow::Result;
use clap::Parser;

use super::utils::format_companies;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all companies")]
pub struct Options {
    #[clap(long = "industry", help = "Only show companies in this industry")]
    pub industry: Option<String>,
}

pub async fn handle(options: &Options, state: State) -> Result<()> {
    let mut companies = state.api.list_companies().await?;

    if let Some(industry) = options.industry.as_deref() {
        companies.retain(|c| c.industry.eq_ignore_ascii_case(industry));
    }

    if companies.is_empty() {
        log::info!("No companies found");
    } else {
        println!("{}", format_companies(&companies, true).join("\n"));
    }

    Ok(())
}
