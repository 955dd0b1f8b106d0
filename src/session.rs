use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

/// Backing storage for the bearer credential.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>>;
    /// `None` removes the stored credential.
    async fn persist(&self, token: Option<&str>) -> Result<()>;
}

/// Credential store that never touches the disk.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: Mutex<Option<String>>,
}

impl MemoryCredentials {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Mutex::new(token),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentials {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().await.clone())
    }

    async fn persist(&self, token: Option<&str>) -> Result<()> {
        *self.token.lock().await = token.map(str::to_string);

        Ok(())
    }
}

/// Explicit session context shared by the API client and the session guard.
///
/// The current credential is cached in memory and written through to the
/// backing store on every change, so reads never hit the disk.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn CredentialStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// An unreadable store counts as signed out so `auth login` can replace it.
    pub async fn load<S>(store: S) -> Self
    where
        S: CredentialStore + 'static,
    {
        let token = match store.load().await {
            Ok(token) => token,
            Err(err) => {
                log::warn!("Ignoring unreadable stored credential: {err:#}");
                None
            }
        };

        Self {
            token: Arc::new(RwLock::new(token)),
            store: Arc::new(store),
        }
    }

    /// Session whose credential lives only for the lifetime of the process.
    pub fn in_memory(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.clone())),
            store: Arc::new(MemoryCredentials::new(token)),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub async fn set_credential(&self, token: &str) -> Result<()> {
        *self.token.write().await = Some(token.to_string());

        self.store.persist(Some(token)).await
    }

    /// The in-memory credential is dropped even if the store fails to update.
    pub async fn clear_credential(&self) -> Result<()> {
        self.token.write().await.take();

        self.store.persist(None).await
    }
}
