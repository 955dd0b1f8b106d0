use super::types::{BatchMatchRequest, BatchMatchResponse, MatchResult, Project, ScoredMatch};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Scores one freelancer against one project.
    pub async fn find_matches(
        &self,
        freelancer_id: &str,
        project: &Project,
    ) -> Result<MatchResult, ApiError> {
        self.post(
            &format!(
                "/api/matching/find-matches?freelancer_id={}",
                encode_query_value(freelancer_id)
            ),
            project,
        )
        .await
    }

    /// Ranks freelancers for a project. Filtering by `min_score` happens on
    /// the backend, the threshold is passed through as given.
    pub async fn batch_match(
        &self,
        project: &Project,
        min_score: f64,
    ) -> Result<Vec<ScoredMatch>, ApiError> {
        self.post::<BatchMatchResponse, _>(
            "/api/matching/batch-match",
            &BatchMatchRequest { project, min_score },
        )
        .await
        .map(BatchMatchResponse::into_matches)
    }
}

fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    encoded
}
