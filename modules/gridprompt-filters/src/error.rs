use ai_client::AiError;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::validate::SchemaViolation;

/// Every way a filter request can fail. Callers outside the service only
/// see a generic message; the variant is kept for logs and status mapping.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream completion failed: {0}")]
    Upstream(#[from] AiError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaViolation),
}

impl FilterError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterError::InvalidInput(_) => "invalid_input",
            FilterError::Upstream(_) => "upstream",
            FilterError::Extraction(ExtractError::NoJsonFound) => "no_json_found",
            FilterError::Extraction(ExtractError::Parse(_)) => "parse_error",
            FilterError::Schema(_) => "schema_violation",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, FilterError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            FilterError::InvalidInput("empty".into()),
            FilterError::Upstream(AiError::EmptyResponse),
            FilterError::Extraction(ExtractError::NoJsonFound),
            FilterError::Extraction(ExtractError::Parse("eof".into())),
            FilterError::Schema(SchemaViolation::Shape("array".into())),
        ];
        let kinds: std::collections::HashSet<_> = errors.iter().map(FilterError::kind).collect();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn only_invalid_input_is_client_error() {
        assert!(FilterError::InvalidInput("empty".into()).is_client_error());
        assert!(!FilterError::Upstream(AiError::Network("reset".into())).is_client_error());
        assert!(!FilterError::Extraction(ExtractError::NoJsonFound).is_client_error());
    }
}
