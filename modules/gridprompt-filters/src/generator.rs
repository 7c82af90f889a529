use std::sync::Arc;

use ai_client::{truncate_to_char_boundary, ChatAgent};
use gridprompt_common::{DomainSchema, FilterSpec};
use tracing::{debug, info};

use crate::error::FilterError;
use crate::extract::extract_json;
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use crate::validate::validate;

/// Raw replies are logged up to this many bytes.
const RAW_REPLY_LOG_BYTES: usize = 2000;

/// Turns a natural-language query into a validated [`FilterSpec`] for one domain.
///
/// Holds the only resource shared between requests: the completion agent.
#[derive(Clone)]
pub struct FilterGenerator {
    agent: Arc<dyn ChatAgent>,
}

impl FilterGenerator {
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self { agent }
    }

    /// Prompt the model, extract its JSON, and validate it against `domain`.
    /// No retries: any failure ends the request.
    pub async fn generate(
        &self,
        domain: &DomainSchema,
        query: &str,
    ) -> Result<FilterSpec, FilterError> {
        if query.trim().is_empty() {
            return Err(FilterError::InvalidInput("query must not be empty".into()));
        }

        let prompt = build_prompt(domain, query);
        let reply = self
            .agent
            .chat_completion(SYSTEM_INSTRUCTION, &prompt)
            .await?;

        debug!(
            domain = domain.name,
            reply = truncate_to_char_boundary(&reply, RAW_REPLY_LOG_BYTES),
            "Model raw response"
        );

        let value = extract_json(&reply)?;
        let spec = validate(value, domain)?;

        info!(
            domain = domain.name,
            filters = spec.filters.len(),
            sorters = spec.sorters.len(),
            "Generated filters"
        );

        Ok(spec)
    }
}
