use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "maigen";
#[cfg(windows)]
pub const EXEC_NAME: &str = "maigen.exe";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Store directory, relative to the home directory.
pub const STORE_DIR: &str = ".maigen";

pub const AUTH_STORE_FILE: &str = "auth.json";

/// Environment variable that overrides the stored credential for one run.
pub const TOKEN_ENV: &str = "MAIGEN_TOKEN";

/// Where the guard sends users whose session could not be validated.
pub const REAUTH_PAGE: &str = "/login-redirect";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
