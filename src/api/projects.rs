use super::types::Project;
use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/api/projects").await
    }

    pub async fn create_project(&self, project: &Project) -> Result<Project, ApiError> {
        self.post("/api/projects", project).await
    }
}
