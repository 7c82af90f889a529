use async_trait::async_trait;

use crate::error::AiError;

// =============================================================================
// ChatAgent Trait
// =============================================================================

/// A provider that turns a system instruction plus one user message into the
/// text of a single completion.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    async fn chat_completion(&self, system: &str, user: &str) -> Result<String, AiError>;
}
