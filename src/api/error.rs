use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No authentication token found")]
    Unauthenticated,

    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("Request failed with status {status}: {detail}"),
        None => format!("Request failed with status {status}"),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Status { status: 401, .. })
    }
}
