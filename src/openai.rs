//! Utilities for querying the OpenAI API via the chat completions endpoint.
//!
//! For specific details on request/response schemas, see the [OpenAI API chat completions docs](https://platform.openai.com/docs/api-reference/chat/create).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::OmneuroError;

/// Author of a `messages` item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A `chat/completions` `messages` item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        ChatMessage {
            role,
            content: content.into(),
        }
    }
}

/// Ordered messages sent with one completion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation(Vec<ChatMessage>);

impl Conversation {
    /// A system instruction followed by a single user turn.
    pub fn instructed(system: &str, user: &str) -> Self {
        Conversation(vec![
            ChatMessage::new(Role::System, system),
            ChatMessage::new(Role::User, user),
        ])
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A `chat/completions` request body
#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub model: String,
    pub messages: &'a Conversation,
    pub temperature: f32,
}

/// A `chat/completions` response message
#[derive(Deserialize)]
pub struct ChatResponseMessage {
    pub content: Option<String>,
}

/// A `chat/completions` response choice
#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

/// A `chat/completions` response
#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// Error body returned alongside non-2xx statuses
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Anything that can turn a conversation into a reply.
pub trait ChatCompletion {
    fn complete(&self, conversation: &Conversation) -> Result<String, OmneuroError>;
}

/// Blocking client for the `chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    url: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, OmneuroError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(OpenAiClient {
            http,
            api_key: config.api_key.clone(),
            url: format!("{}/chat/completions", config.base_url),
            model: config.model.to_string(),
            temperature: config.temperature,
        })
    }
}

impl ChatCompletion for OpenAiClient {
    /// Send one request and return the first choice's content. No retries.
    fn complete(&self, conversation: &Conversation) -> Result<String, OmneuroError> {
        let req_body = ChatRequest {
            model: self.model.clone(),
            messages: conversation,
            temperature: self.temperature,
        };
        debug!(model = %self.model, messages = conversation.len(), "sending completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            warn!(status = status.as_u16(), %message, "completion request rejected");
            return Err(OmneuroError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(OmneuroError::EmptyResponse)
    }
}
