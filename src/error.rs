//! Error types for sentence decoding and attribute encoding.
//!
//! This module provides the single [`Error`] enum shared by the decoder, the encoder,
//! the duration parser and the modifier registry.
//!
//! ## Error Categories
//!
//! - **Shape Errors**: The reply has the wrong number of sentences for the destination
//! - **Duration Errors**: A duration-modified field carried a value outside the duration grammar
//! - **Scalar Errors**: A plain integer or boolean failed to parse (strict policy only)
//! - **Type Mismatches**: A decoded value does not fit the Rust type of the field
//!
//! Lenient scalar decoding never produces an error; see
//! [`ScalarPolicy`](crate::ScalarPolicy).
//!
//! ## Examples
//!
//! ```rust
//! use routeros_wire::{parse_duration, Error};
//!
//! let err = parse_duration("abc").unwrap_err();
//! assert!(matches!(err, Error::MalformedDuration { .. }));
//! assert!(err.to_string().contains("abc"));
//! ```

use crate::descriptor::FieldKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while mapping records to and from sentences.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A single-record destination received more than one sentence.
    #[error("Cannot decode {count} sentences into a single record")]
    MultipleSentencesForSingleTarget { count: usize },

    /// A collection destination received too few sentences.
    #[error("Cannot decode {count} sentence(s) into a collection: at least {required} required")]
    NotEnoughSentencesForCollection { count: usize, required: usize },

    /// A duration value did not match `[<days>d]<clock-duration>`.
    #[error("Malformed duration {input:?}: {reason}")]
    MalformedDuration { input: String, reason: String },

    /// A scalar value failed to parse under the strict scalar policy.
    #[error("Invalid {kind} value {value:?} for key {key:?}")]
    InvalidScalar {
        key: String,
        kind: FieldKind,
        value: String,
    },

    /// A decoded value cannot be stored in the field's Rust type.
    #[error("Type mismatch for field {field:?}: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// A record accessor was called with a field name the record does not declare.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A lookup that requires exactly one record received an empty reply.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed duration error for `input`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routeros_wire::Error;
    ///
    /// let err = Error::malformed_duration("1x", "unknown unit \"x\"");
    /// assert!(err.to_string().contains("unknown unit"));
    /// ```
    pub fn malformed_duration(input: &str, reason: &str) -> Self {
        Error::MalformedDuration {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid scalar error for a strict-mode parse failure.
    pub fn invalid_scalar(key: &str, kind: FieldKind, value: &str) -> Self {
        Error::InvalidScalar {
            key: key.to_string(),
            kind,
            value: value.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routeros_wire::Error;
    ///
    /// let err = Error::type_mismatch("mtu", "u16", "integer 70000");
    /// assert!(err.to_string().contains("expected u16"));
    /// ```
    pub fn type_mismatch(field: &str, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unknown_field(name: &str) -> Self {
        Error::UnknownField(name.to_string())
    }

    /// Creates a not-found error carrying a description of what was looked up.
    pub fn not_found<T: fmt::Display>(what: T) -> Self {
        Error::NotFound(what.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_messages() {
        let err = Error::MultipleSentencesForSingleTarget { count: 3 };
        assert_eq!(
            err.to_string(),
            "Cannot decode 3 sentences into a single record"
        );

        let err = Error::NotEnoughSentencesForCollection {
            count: 1,
            required: 2,
        };
        assert!(err.to_string().contains("at least 2 required"));
    }

    #[test]
    fn test_invalid_scalar_names_kind() {
        let err = Error::invalid_scalar("disabled", FieldKind::Bool, "maybe");
        assert_eq!(
            err.to_string(),
            "Invalid boolean value \"maybe\" for key \"disabled\""
        );
    }

    #[test]
    fn test_not_found() {
        let err = Error::not_found("ip address `*1`");
        assert!(err.is_not_found());
        assert!(!Error::custom("x").is_not_found());
    }
}
