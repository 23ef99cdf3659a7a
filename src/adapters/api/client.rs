use crate::ports::{RepositoryError, RepositoryResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Thin reqwest wrapper for the directory REST service. The service
/// speaks plain JSON: arrays and objects with no envelope, so responses
/// deserialize straight into the target type.
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("campsite-cli/0.1.0")
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;

        self.handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, R: serde::Serialize>(
        &self,
        path: &str,
        body: &R,
    ) -> RepositoryResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> RepositoryResult<T> {
        let status = response.status();

        match status.as_u16() {
            200..=299 => {
                let response_text = response
                    .text()
                    .await
                    .map_err(|e| RepositoryError::Network(e.to_string()))?;

                tracing::debug!("API Response: {}", response_text);

                serde_json::from_str(&response_text).map_err(|e| {
                    RepositoryError::Serialization(format!(
                        "Failed to parse response: {}. Response was: {}",
                        e, response_text
                    ))
                })
            }
            404 => Err(RepositoryError::NotFound("Resource not found".to_string())),
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(RepositoryError::Api(format!(
                    "HTTP {}: {}",
                    status, error_text
                )))
            }
        }
    }
}
