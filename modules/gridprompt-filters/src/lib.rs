pub mod domains;
pub mod error;
pub mod extract;
pub mod generator;
pub mod prompt;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod validate;

pub use error::FilterError;
pub use extract::{extract_json, ExtractError};
pub use generator::FilterGenerator;
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
pub use validate::{validate, SchemaViolation};
