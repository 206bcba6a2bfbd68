//! Punctuation check run on every question before it is sent.

use thiserror::Error;

/// Shown under the prompt while the question is acceptable.
pub const HELPER_TEXT: &str = "Termina con ? o ¿ ?";

/// Why a question was rejected. The message is the inline feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("¡No dejes la pregunta vacía!")]
    EmptyQuestion,
    #[error("Recuerda terminar con ?")]
    MissingQuestionMark,
}

/// Validate raw input.
///
/// The `¿...?` check only short-circuits on a full prefix + suffix match;
/// everything else falls through to the plain `?` suffix rule. A question
/// like `¿hello` is therefore rejected by the suffix rule, not the prefix one.
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }
    if trimmed.starts_with('¿') && trimmed.ends_with('?') {
        return Ok(());
    }
    if !trimmed.ends_with('?') {
        return Err(ValidationError::MissingQuestionMark);
    }
    Ok(())
}
