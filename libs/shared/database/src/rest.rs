use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_models::error::RemoteError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Thin JSON-over-HTTP client for the clinic API.
pub struct RestClient {
    client: Client,
    base_url: String,
    authorization: Option<String>,
}

impl RestClient {
    pub fn new(config: &AppConfig, session: Option<&Session>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            authorization: session.map(Session::bearer),
        }
    }

    fn get_headers(&self, request_id: &str) -> Result<HeaderMap, RemoteError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(request_id)
                .map_err(|e| RemoteError::Transport(e.to_string()))?,
        );

        if let Some(bearer) = &self.authorization {
            let value = HeaderValue::from_str(bearer)
                .map_err(|_| RemoteError::Auth("Access token is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<String, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();
        debug!(%request_id, "Making {} request to {}", method, url);

        let headers = self.get_headers(&request_id)?;

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await.map_err(|e| {
            error!(%request_id, "Request to {} failed: {}", url, e);
            RemoteError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        if !status.is_success() {
            error!(%request_id, "API error ({}): {}", status, text);
            return Err(RemoteError::from_status(status.as_u16(), text));
        }

        Ok(text)
    }

    /// Issue a request and decode the JSON response body.
    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T, RemoteError>
    where T: DeserializeOwned {
        let text = self.send(method, path, body).await?;

        serde_json::from_str(&text).map_err(|e| {
            error!("Could not decode response from {}: {}", path, e);
            RemoteError::Decode(e.to_string())
        })
    }

    /// Issue a request whose response body, if any, is ignored.
    pub async fn request_empty(&self, method: Method, path: &str, body: Option<Value>) -> Result<(), RemoteError> {
        self.send(method, path, body).await.map(|_| ())
    }
}
