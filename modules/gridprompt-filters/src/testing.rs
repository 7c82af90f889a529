// Test doubles for the completion boundary.
//
// MockChatAgent stands in for the OpenAI client: canned replies or canned
// failures, with every prompt recorded for assertions.

use std::sync::Mutex;

use ai_client::{AiError, ChatAgent};
use async_trait::async_trait;

type Responder = Box<dyn Fn(&str) -> Result<String, AiError> + Send + Sync>;

/// One recorded completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
}

pub struct MockChatAgent {
    respond: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatAgent {
    /// Answer every prompt with the result of `respond`.
    pub fn new(respond: impl Fn(&str) -> Result<String, AiError> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| Ok(text.clone()))
    }

    /// Always fail as an unreachable provider would.
    pub fn unreachable() -> Self {
        Self::new(|_| Err(AiError::Network("connection refused".into())))
    }

    /// Always fail with an HTTP error status from the provider.
    pub fn failing_with_status(status: u16, body: &'static str) -> Self {
        Self::new(move |_| {
            Err(AiError::Api {
                status,
                body: body.to_string(),
            })
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl ChatAgent for MockChatAgent {
    async fn chat_completion(&self, system: &str, user: &str) -> Result<String, AiError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(RecordedCall {
                system: system.to_string(),
                prompt: user.to_string(),
            });
        (self.respond)(user)
    }
}

/// Reply text a well-behaved model might produce: JSON inside a code fence
/// with a sentence of prose around it.
pub fn fenced_reply(json: &str) -> String {
    format!("Here are the filters for your grid:\n```json\n{json}\n```\nLet me know if you need anything else.")
}
