//! JSON syntax validation for pasted panel text.

use crate::error::ParseError;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Result of a validation, shaped for the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error_message: String,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: message.into(),
        }
    }
}

impl From<Result<(), ParseError>> for ValidationOutcome {
    fn from(result: Result<(), ParseError>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::valid(),
            Err(e) => ValidationOutcome::invalid(e.message),
        }
    }
}

/// Check that `input` is well-formed JSON. Syntax only, no schema.
///
/// Values are skipped rather than built, so nesting depth, number range and
/// unpaired surrogate escapes are not held against the input.
pub fn check_json(input: &str) -> Result<(), ParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();
    IgnoredAny::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(())
}

/// Validate `input` and fold the result into a panel outcome
pub fn validate_json(input: &str) -> ValidationOutcome {
    let outcome = ValidationOutcome::from(check_json(input));
    if !outcome.is_valid {
        tracing::debug!(error = %outcome.error_message, "JSON validation failed");
    }
    outcome
}
