use super::types::CompanyProfile;
use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_companies(&self) -> Result<Vec<CompanyProfile>, ApiError> {
        self.get("/api/companies").await
    }

    pub async fn create_company(&self, company: &CompanyProfile) -> Result<CompanyProfile, ApiError> {
        self.post("/api/companies", company).await
    }
}
