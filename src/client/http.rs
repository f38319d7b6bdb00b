use super::error::ClientError;
use crate::models::Application;
use reqwest::{Client, StatusCode};

/// HTTP client for the application-management service API
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new client against the given base URL.
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        if server_url.is_empty() {
            return Err(ClientError::config_error("Server URL not configured"));
        }

        let client = Client::builder()
            .user_agent(concat!("appctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch an application, including its full revision history.
    pub async fn get_application(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Application, ClientError> {
        let url = format!("{}/api/v1/applications/{}", self.base_url, name);
        tracing::debug!("GET {url} (appNamespace={namespace})");

        let mut request = self.client.get(&url);
        if !namespace.is_empty() {
            request = request.query(&[("appNamespace", namespace)]);
        }
        let response = request.send().await.map_err(ClientError::RequestFailed)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                name: name.to_string(),
            });
        }
        if status.is_success() {
            let text = response.text().await.map_err(ClientError::RequestFailed)?;
            serde_json::from_str(&text).map_err(ClientError::SerializationError)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::api_error(status.as_u16(), error_text))
        }
    }
}
