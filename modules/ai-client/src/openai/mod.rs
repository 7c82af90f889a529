mod client;
pub(crate) mod types;

use async_trait::async_trait;

use crate::error::AiError;
use crate::traits::ChatAgent;

use client::{OpenAiClient, OPENAI_API_URL};

const MAX_TOKENS: u32 = 4096;

// =============================================================================
// OpenAi Agent
// =============================================================================

#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Get the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_URL)
    }

    fn client(&self) -> OpenAiClient<'_> {
        OpenAiClient::new(&self.api_key, &self.http, self.base_url())
    }

    fn chat_request(&self, system: &str, user: &str) -> types::ChatRequest {
        let request = types::ChatRequest::new(&self.model)
            .message(types::WireMessage::system(system))
            .message(types::WireMessage::user(user))
            .choices(1);

        if types::uses_max_completion_tokens(&self.model) {
            request.max_completion_tokens(MAX_TOKENS)
        } else {
            request.max_tokens(MAX_TOKENS).temperature(0.0)
        }
    }
}

// =============================================================================
// ChatAgent Implementation
// =============================================================================

#[async_trait]
impl ChatAgent for OpenAi {
    async fn chat_completion(&self, system: &str, user: &str) -> Result<String, AiError> {
        let request = self.chat_request(system, user);
        let response = self.client().chat(&request).await?;

        response
            .into_first_content()
            .ok_or(AiError::EmptyResponse)
    }
}
