use super::types::{AuthToken, LoginRequest};
use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, ApiError> {
        self.post_public("/api/auth/login", &LoginRequest { email, password })
            .await
    }
}
