//! JSON codec between preference records and stored strings.
//!
//! Encoding is serde field order, so equal records always produce identical
//! text. Decoding is all-or-nothing: text that does not parse, or parses into
//! a record that fails its own validation, is a [`ParseError`] and never a
//! partially populated value.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text is not valid JSON for the record shape (truncated, wrong
    /// types, unknown enum values, missing fields).
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The JSON shape was right but a field violates the record's invariants.
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ParseError {
    /// Build an [`ParseError::Invalid`] for `field`.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid { field, reason: reason.into() }
    }
}

/// A structured value persisted under a fixed backing-store key.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq {
    /// Backing-store key holding the encoded record.
    const KEY: &'static str;

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Invalid`] naming the offending field.
    fn validate(&self) -> Result<(), ParseError> {
        Ok(())
    }
}

/// Encode a record as JSON text.
#[must_use]
pub fn encode<T: Record>(record: &T) -> String {
    // Records are plain structs with string keys; serde_json only fails on
    // non-string map keys or failing custom serializers, neither of which
    // a `Record` has.
    serde_json::to_string(record).unwrap_or_default()
}

/// Decode JSON text into a validated record.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] when the text does not deserialize and
/// [`ParseError::Invalid`] when the record fails validation.
pub fn decode<T: Record>(text: &str) -> Result<T, ParseError> {
    let record: T = serde_json::from_str(text)?;
    record.validate()?;
    Ok(record)
}

/// Reject empty or whitespace-only required strings.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ParseError> {
    if value.trim().is_empty() {
        return Err(ParseError::invalid(field, "must not be empty"));
    }
    Ok(())
}
