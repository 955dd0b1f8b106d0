//! Typed access to the marketplace backend.
//!
//! Every protected operation reads the credential from the [`Session`] at call
//! time and fails with [`ApiError::Unauthenticated`] before any network I/O
//! when there is none.

mod auth;
mod companies;
mod error;
mod matching;
mod profiles;
mod projects;
pub mod types;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use self::error::ApiError;
use crate::session::Session;
use crate::state::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    session: Session,
}

impl ApiClient {
    pub fn new(http: HttpClient, session: Session) -> Self {
        Self { http, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn credential(&self) -> Result<String, ApiError> {
        self.session.token().await.ok_or_else(|| {
            log::debug!("No credential in session, skipping request");

            ApiError::Unauthenticated
        })
    }

    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let token = self.credential().await?;

        self.http
            .request::<T, ()>(Method::GET, path, Some(token.as_str()), None)
            .await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token = self.credential().await?;

        self.http
            .request(Method::POST, path, Some(token.as_str()), Some(body))
            .await
    }

    /// For the few endpoints reachable without a session (login, register).
    async fn post_public<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.http.request(Method::POST, path, None, Some(body)).await
    }
}

#[cfg(test)]
mod tests;
