use crate::config::ClientConfig;
use crate::domain::model::{ApiResponse, Credential, Method, RequestDescriptor};
use crate::domain::ports::Transport;
use crate::utils::error::{ClientError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TOKEN_HEADER: &str = "X-Token";

/// reqwest-backed transport speaking the backend's JSON envelope.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token_header: String,
    credential: Option<Credential>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            credential: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_header: config.token_header.clone(),
            credential: config.token.clone().map(Credential::new),
        })
    }

    /// Credential sent with every request that does not carry its own.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn with_token_header(mut self, header: impl Into<String>) -> Self {
        self.token_header = header.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn query_pairs(body: &Value) -> Vec<(String, String)> {
    match body {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect(),
        _ => Vec::new(),
    }
}

impl Transport for HttpTransport {
    type Response = ApiResponse;
    type Error = ClientError;

    async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => {
                let builder = self.client.get(&url);
                match &request.body {
                    Some(body) => builder.query(&query_pairs(body)),
                    None => builder,
                }
            }
            Method::Post => {
                let builder = self.client.post(&url);
                match &request.body {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        if let Some(credential) = request.credential.as_ref().or(self.credential.as_ref()) {
            builder = builder.header(self.token_header.as_str(), credential.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("{} {} -> {}", request.method, request.path, status);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
