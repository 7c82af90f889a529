use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::types::*;
use crate::error::AiError;

pub(crate) const OPENAI_API_URL: &str = "https://api.openai.com/v1";

pub(crate) struct OpenAiClient<'a> {
    api_key: &'a str,
    http: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> OpenAiClient<'a> {
    pub fn new(api_key: &'a str, http: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            api_key,
            http,
            base_url,
        }
    }

    fn headers(&self) -> Result<HeaderMap, AiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| AiError::Config(format!("Invalid API key header: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AiError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        debug!(model = %request.model, "OpenAI chat request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        if let Some(ref usage) = chat_response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "OpenAI chat usage"
            );
        }
        Ok(chat_response)
    }
}
