pub mod auth;
pub mod companies;
pub mod completions;
pub mod freelancers;
pub mod matches;
pub mod projects;
pub mod whoami;

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::config::EXEC_NAME;
use crate::guard::{Navigation, SessionGuard};
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    #[clap(name = "whoami", alias = "me", alias = "info")]
    Whoami(whoami::Options),
    #[clap(alias = "freelancer")]
    Freelancers(freelancers::Options),
    #[clap(alias = "company")]
    Companies(companies::Options),
    #[clap(alias = "project")]
    Projects(projects::Options),
    #[clap(alias = "match")]
    Matches(matches::Options),
    Completions(completions::Options),
}

impl Commands {
    /// Page of the web client this command stands for.
    pub fn page(&self) -> &'static str {
        match self {
            Self::Auth(options) => options.commands.page(),
            Self::Completions(_) => "/",
            Self::Whoami(_) => "/dashboard",
            Self::Freelancers(_) => "/freelancers",
            Self::Companies(_) => "/companies",
            Self::Projects(options) => options.commands.page(),
            Self::Matches(_) => "/projects/matches",
        }
    }
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    let page = command.page();

    let mut guard = SessionGuard::new(&state.api);
    let navigation = guard.check(page).await.navigation();

    match navigation {
        Navigation::Render(None) => match command {
            Commands::Auth(options) => auth::handle(options, state).await,
            Commands::Completions(options) => {
                completions::handle(&options);
                Ok(())
            }
            _ => unreachable!("`{page}` is not a public page"),
        },

        Navigation::Render(Some(user)) => match command {
            Commands::Whoami(options) => whoami::handle(&options, &user),
            Commands::Freelancers(options) => freelancers::handle(options, state, user).await,
            Commands::Companies(options) => companies::handle(options, state, user).await,
            Commands::Projects(options) => projects::handle(options, state, user).await,
            Commands::Matches(options) => matches::handle(options, state, user).await,
            Commands::Auth(_) | Commands::Completions(_) => {
                unreachable!("`{page}` is a public page")
            }
        },

        Navigation::Redirect(target) => {
            log::debug!("{page} redirects to {target}");

            bail!(
                "Your session has expired or you are not logged in. Run `{} auth login` to continue.",
                EXEC_NAME
            )
        }

        Navigation::Pending => bail!("Session check for `{page}` did not complete"),
    }
}
