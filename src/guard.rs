//! Session guard: decides whether a page may render before anything in it
//! talks to the backend.

use crate::api::types::CurrentUser;
use crate::api::ApiClient;
use crate::config::REAUTH_PAGE;

/// Pages reachable without a valid credential.
pub const PUBLIC_PAGES: &[&str] = &["/", "/login", "/register"];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PAGES.contains(&path)
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Unchecked,
    PublicPageAllowed,
    Authenticated(CurrentUser),
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Render the page, with the validated user on protected pages.
    Render(Option<CurrentUser>),
    Redirect(&'static str),
    /// Still checking, show a loading state.
    Pending,
}

impl GuardState {
    pub fn navigation(&self) -> Navigation {
        match self {
            Self::Unchecked => Navigation::Pending,
            Self::PublicPageAllowed => Navigation::Render(None),
            Self::Authenticated(user) => Navigation::Render(Some(user.clone())),
            Self::Unauthenticated => Navigation::Redirect(REAUTH_PAGE),
        }
    }
}

#[derive(Debug)]
pub struct SessionGuard<'a> {
    api: &'a ApiClient,
    state: GuardState,
}

impl<'a> SessionGuard<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            state: GuardState::Unchecked,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Runs the check for a navigation to `path`. Every call starts over from
    /// [`GuardState::Unchecked`] since the credential may have changed.
    pub async fn check(&mut self, path: &str) -> &GuardState {
        self.state = GuardState::Unchecked;

        let next = if is_public(path) {
            GuardState::PublicPageAllowed
        } else if !self.api.session().is_signed_in().await {
            GuardState::Unauthenticated
        } else {
            match self.api.current_user().await {
                Ok(user) => GuardState::Authenticated(user),

                Err(err) => {
                    if err.is_unauthenticated() {
                        log::warn!("Your session is no longer valid: {err}");
                    } else {
                        log::warn!("Could not validate your session: {err}");
                    }

                    // a failed check of either kind invalidates the credential
                    if let Err(err) = self.api.session().clear_credential().await {
                        log::warn!("Failed to remove stored credential: {err:#}");
                    }

                    GuardState::Unauthenticated
                }
            }
        };

        log::debug!("guard: {path} -> {next:?}");

        self.state = next;
        &self.state
    }
}
