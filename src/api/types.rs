use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Freelancer,
    Company,
}

impl Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Freelancer => write!(f, "Freelancer"),
            Self::Company => write!(f, "Company"),
        }
    }
}

// the backend sends `null` for list fields it never filled in
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn freelancer() -> UserType {
    UserType::Freelancer
}

fn company() -> UserType {
    UserType::Company
}

/// Result of `GET /api/profiles/me`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CurrentUser {
    pub email: String,
    pub user_type: UserType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FreelancerProfile {
    #[serde(default)]
    pub experience: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    pub email: String,
    #[serde(default = "freelancer")]
    pub user_type: UserType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    /// Not echoed back when a company is created.
    #[serde(default)]
    pub email: String,
    #[serde(default = "company")]
    pub user_type: UserType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub timeline: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub company_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freelancer_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub user_type: UserType,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthToken {
    pub token: String,
    pub user_type: UserType,
}

/// Result of matching one freelancer against one project.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MatchResult {
    pub match_score: f64,
    #[serde(default)]
    pub compatibility_details: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub next_steps: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchMatchRequest<'a> {
    pub project: &'a Project,
    pub min_score: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScoredMatch {
    pub freelancer_id: String,
    #[serde(alias = "match_score")]
    pub score: f64,
    #[serde(default)]
    pub analysis: Option<Value>,
}

/// The batch endpoint answers either with a bare list or with an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BatchMatchResponse {
    List(Vec<ScoredMatch>),
    Envelope {
        #[serde(default)]
        total_matches: Option<usize>,
        matches: Vec<ScoredMatch>,
    },
}

impl BatchMatchResponse {
    pub fn into_matches(self) -> Vec<ScoredMatch> {
        match self {
            Self::List(matches) | Self::Envelope { matches, .. } => matches,
        }
    }
}
