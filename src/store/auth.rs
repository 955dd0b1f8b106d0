use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{store_path, Storable, Store};
use crate::config::AUTH_STORE_FILE;
use crate::impl_store;
use crate::session::CredentialStore;

/// On-disk shape of the credential store, a single optional bearer token.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Auth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Storable for Auth {
    fn path() -> Result<PathBuf> {
        store_path(AUTH_STORE_FILE)
    }
}

impl_store!(Auth);

/// Credential store backed by the `auth.json` file in the home directory.
#[derive(Debug, Default)]
pub struct PersistedCredentials;

#[async_trait]
impl CredentialStore for PersistedCredentials {
    async fn load(&self) -> Result<Option<String>> {
        // nothing stored yet, the file is created on the first login
        if tokio::fs::metadata(Auth::path()?).await.is_err() {
            return Ok(None);
        }

        Ok(Auth::new().await?.token)
    }

    async fn persist(&self, token: Option<&str>) -> Result<()> {
        Auth {
            token: token.map(str::to_string),
        }
        .save()
        .await?;

        Ok(())
    }
}
