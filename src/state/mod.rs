pub mod http;
pub mod scope;

use anyhow::Result;

use self::http::HttpClient;
use crate::api::ApiClient;
use crate::session::Session;
use crate::store::auth::PersistedCredentials;

#[derive(Debug, Clone)]
pub struct State {
    pub session: Session,
    pub api: ApiClient,
}

#[derive(Debug, Default)]
pub struct StateOptions {
    pub override_token: Option<String>,
    pub api_url: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        // an override token is never written to the store
        let session = match options.override_token {
            Some(token) => {
                log::debug!("Using credential from the environment");

                Session::in_memory(Some(token))
            }

            None => Session::load(PersistedCredentials).await,
        };

        let http = HttpClient::new(options.api_url)?;

        Ok(Self::from_parts(http, session))
    }

    pub fn from_parts(http: HttpClient, session: Session) -> Self {
        State {
            api: ApiClient::new(http, session.clone()),
            session,
        }
    }
}
