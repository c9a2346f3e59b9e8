//! Azure OpenAI chat-completions client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{build_messages, parse_mapping, ChatMessage};
use super::{MappingProvider, ModelConnector};
use crate::error::{RemapError, RemapResult};
use crate::types::{ColumnMapping, ModelConnection};

/// Fixed sampling parameters for every mapping request
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.95;
pub const FREQUENCY_PENALTY: f64 = 0.0;
pub const PRESENCE_PENALTY: f64 = 0.0;
pub const MAX_TOKENS: u32 = 800;

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [ChatMessage],
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub max_tokens: u32,
    pub stop: Option<Vec<String>>,
}

impl<'a> ChatRequest<'a> {
    pub fn new(messages: &'a [ChatMessage]) -> Self {
        Self {
            messages,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
            max_tokens: MAX_TOKENS,
            stop: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Mapping provider backed by one Azure OpenAI deployment
pub struct AzureOpenAiClient {
    client: reqwest::Client,
    connection: ModelConnection,
}

impl AzureOpenAiClient {
    pub fn new(client: reqwest::Client, connection: ModelConnection) -> Self {
        Self { client, connection }
    }

    /// Send the messages and return the first choice's text
    pub async fn complete(&self, messages: &[ChatMessage]) -> RemapResult<String> {
        let endpoint = self.connection.endpoint();
        debug!(
            host = %self.connection.host,
            deployment = %self.connection.deployment,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&endpoint)
            .header("api-key", &self.connection.api_key)
            .json(&ChatRequest::new(messages))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(RemapError::Model(format!("API error ({}): {}", status, text)));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| RemapError::Model("Invalid response format: no message content".to_string()))?;

        debug!(reply = %content, "Model reply received");
        Ok(content)
    }
}

#[async_trait]
impl MappingProvider for AzureOpenAiClient {
    async fn create_mapping(&self, source: &[String], target: &[String]) -> RemapResult<ColumnMapping> {
        let messages = build_messages(source, target);
        let reply = self.complete(&messages).await?;
        parse_mapping(&reply)
    }
}

/// Builds per-request Azure clients over one shared connection pool.
/// Holds no credentials.
#[derive(Clone, Default)]
pub struct AzureConnector {
    client: reqwest::Client,
}

impl AzureConnector {
    /// `timeout` bounds each model call; `None` leaves it unbounded
    pub fn new(timeout: Option<Duration>) -> RemapResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl ModelConnector for AzureConnector {
    fn connect(&self, connection: ModelConnection) -> Box<dyn MappingProvider> {
        Box::new(AzureOpenAiClient::new(self.client.clone(), connection))
    }
}
