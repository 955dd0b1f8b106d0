use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

pub mod auth;
pub mod macros;

use crate::config::STORE_DIR;

pub trait Storable<T: Serialize + DeserializeOwned + Default + Clone = Self> {
    fn path() -> Result<PathBuf>;
}

#[async_trait]
pub trait Store<T: Storable + Serialize + DeserializeOwned + Default + Clone = Self> {
    // custom trait with its type to implement a macro easily
    #[allow(clippy::new_ret_no_self)]
    async fn new() -> Result<T>;
    async fn save(&self) -> Result<T>;
}

/// Path of `file` inside the store directory.
pub fn store_path(file: &str) -> Result<PathBuf> {
    let path = dirs::home_dir()
        .context("Could not find `home` directory")?
        .join(STORE_DIR)
        .join(file);

    log::debug!("Store path: {}", path.display());

    Ok(path)
}
