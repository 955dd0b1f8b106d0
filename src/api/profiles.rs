use super::types::{AuthToken, CurrentUser, FreelancerProfile, RegisterRequest, UserType};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// The "whoami" call, also used to validate the stored credential.
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get("/api/profiles/me").await
    }

    pub async fn list_freelancers(&self) -> Result<Vec<FreelancerProfile>, ApiError> {
        self.get("/api/profiles").await
    }

    pub async fn create_freelancer_profile(
        &self,
        profile: &FreelancerProfile,
    ) -> Result<FreelancerProfile, ApiError> {
        self.post("/api/profiles", profile).await
    }

    /// Does not store the returned token, callers decide what to do with it.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<AuthToken, ApiError> {
        self.post_public(
            "/api/profiles/register",
            &RegisterRequest {
                email,
                password,
                user_type,
            },
        )
        .await
    }
}
