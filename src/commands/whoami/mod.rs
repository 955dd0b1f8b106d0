use anyhow::Result;
use clap::Parser;

use crate::api::types::CurrentUser;

#[derive(Debug, Parser)]
#[clap(about = "Get information about the current user")]
pub struct Options {}

pub fn handle(_options: &Options, user: &CurrentUser) -> Result<()> {
    log::info!("You are logged in as `{}` ({})", user.email, user.user_type);

    if let Some(name) = user.name.as_deref().filter(|name| !name.is_empty()) {
        log::info!("Company: {name}");
    }

    if !user.skills.is_empty() {
        log::info!("Skills: {}", user.skills.join(", "));
    }

    Ok(())
}
