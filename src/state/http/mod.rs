mod types;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as AsyncClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use self::types::ErrorResponse;
use crate::api::ApiError;
use crate::config::{DEFAULT_API_URL, REQUEST_TIMEOUT, VERSION};

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
}

impl HttpClient {
    pub fn new(api_url: Option<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let ua = format!(
            "maigen_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua)
                .default_headers(headers)
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            base_url,
        })
    }

    async fn handle_response<T>(&self, path: &str, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error(response, status).await);
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| {
            log::debug!("Error deserialize body of {path}: {source}");

            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }

    async fn handle_error(&self, response: Response, status: StatusCode) -> ApiError {
        let body = response.text().await.unwrap_or_default();

        log::debug!("Error response ({status}): {body}");

        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|error| error.message());

        ApiError::Status {
            status: status.as_u16(),
            detail,
        }
    }

    /// Sends a request and parses the JSON body of a successful response.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .request(method.clone(), format!("{}{}", self.base_url, path));

        log::debug!(
            "request: {} {} (authorized: {})",
            method,
            path,
            token.is_some()
        );

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!(
                "request body: {}",
                serde_json::to_string(body).unwrap_or_default()
            );

            request = request.json(body);
        }

        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self.client.execute(request).await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        self.handle_response(path, response).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let http = HttpClient::new(Some("http://localhost:9000/".to_string())).unwrap();

        assert_eq!(http.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_error_detail_shapes() {
        let plain: ErrorResponse = serde_json::from_str(r#"{"detail":"boom"}"#).unwrap();
        assert_eq!(plain.message().as_deref(), Some("boom"));

        let list: ErrorResponse =
            serde_json::from_str(r#"{"detail":[{"loc":["body","budget"],"msg":"field required"}]}"#)
                .unwrap();
        assert!(list.message().unwrap().contains("field required"));

        let null: ErrorResponse = serde_json::from_str(r#"{"detail":null}"#).unwrap();
        assert_eq!(null.message(), None);
    }
}
