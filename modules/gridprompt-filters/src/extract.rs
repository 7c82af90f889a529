//! Pull a JSON object out of free-form model output.
//!
//! Models wrap their JSON in prose or markdown fences, so the reply is
//! scanned for balanced `{...}` spans. Each `{` is tried in order; the first
//! span that parses as JSON wins. Braces inside JSON string literals do not
//! count towards nesting.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model reply")]
    NoJsonFound,

    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Return the first balanced brace span in `text` that parses as JSON.
///
/// Fails with [`ExtractError::NoJsonFound`] when no balanced span exists and
/// [`ExtractError::Parse`] (carrying the first span's error) when spans exist
/// but none of them parse.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let mut first_error: Option<String> = None;

    for span in balanced_spans(text) {
        match serde_json::from_str::<Value>(span) {
            Ok(value) => return Ok(value),
            Err(e) => {
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    Err(first_error.map_or(ExtractError::NoJsonFound, ExtractError::Parse))
}

/// Candidate spans, one per `{` that has a matching `}`, in order of their start.
fn balanced_spans(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices('{')
        .filter_map(move |(start, _)| {
            let rest = &text[start..];
            matching_close(rest).map(|end| &rest[..end])
        })
}

/// Byte length of the balanced span at the start of `s`, which begins with `{`.
fn matching_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}
