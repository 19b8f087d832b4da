//! Configuration options for decoding and encoding.
//!
//! This module provides the types that tune the codec:
//!
//! - [`CodecOptions`]: Main configuration struct
//! - [`ScalarPolicy`]: What happens when a plain integer or boolean fails to parse
//! - [`CollectionPolicy`]: How many sentences a collection destination requires
//!
//! ## Examples
//!
//! ```rust
//! use routeros_wire::{CodecOptions, CollectionPolicy, ScalarPolicy};
//!
//! // Reject unparsable integers and booleans instead of zeroing them
//! let options = CodecOptions::new().with_scalar_policy(ScalarPolicy::Strict);
//!
//! // Let a single sentence populate a one-element collection
//! let options = CodecOptions::new().with_collection_policy(CollectionPolicy::AllowSingle);
//!
//! // Write duration fields back as `1d2h3m4s` instead of plain seconds
//! let options = CodecOptions::new().with_encode_modifiers(true);
//! ```

use crate::modifier::ModifierRegistry;

/// Handling of plain integer and boolean values that fail to parse.
///
/// Fields carrying a modifier (such as `ttlToSeconds`) are always strict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScalarPolicy {
    /// Store the kind's zero value and log a warning.
    #[default]
    Lenient,
    /// Fail with [`Error::InvalidScalar`](crate::Error::InvalidScalar).
    Strict,
}

/// Sentence count required by a collection destination.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::CollectionPolicy;
///
/// assert_eq!(CollectionPolicy::RequireMultiple.min_sentences(), 2);
/// assert_eq!(CollectionPolicy::AllowSingle.min_sentences(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollectionPolicy {
    /// More than one sentence. Established callers rely on this contract.
    #[default]
    RequireMultiple,
    /// At least one sentence. An empty reply still fails.
    AllowSingle,
}

impl CollectionPolicy {
    #[must_use]
    pub const fn min_sentences(&self) -> usize {
        match self {
            CollectionPolicy::RequireMultiple => 2,
            CollectionPolicy::AllowSingle => 1,
        }
    }
}

/// Configuration options for the codec.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::{CodecOptions, ScalarPolicy};
///
/// let options = CodecOptions::new();
/// assert_eq!(options.scalar_policy, ScalarPolicy::Lenient);
/// assert!(!options.encode_modifiers);
///
/// let options = CodecOptions::strict();
/// assert_eq!(options.scalar_policy, ScalarPolicy::Strict);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CodecOptions {
    pub scalar_policy: ScalarPolicy,
    pub collection_policy: CollectionPolicy,
    /// Run modifier encode transforms. Off by default, so duration fields are written
    /// as plain decimal seconds.
    pub encode_modifiers: bool,
    pub modifiers: ModifierRegistry,
}

impl CodecOptions {
    /// Creates default options: lenient scalars, collections of two or more sentences,
    /// built-in modifiers, no modifier re-encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject unparsable scalar values.
    #[must_use]
    pub fn strict() -> Self {
        CodecOptions {
            scalar_policy: ScalarPolicy::Strict,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_scalar_policy(mut self, policy: ScalarPolicy) -> Self {
        self.scalar_policy = policy;
        self
    }

    #[must_use]
    pub fn with_collection_policy(mut self, policy: CollectionPolicy) -> Self {
        self.collection_policy = policy;
        self
    }

    /// Enables or disables modifier encode transforms.
    #[must_use]
    pub fn with_encode_modifiers(mut self, enabled: bool) -> Self {
        self.encode_modifiers = enabled;
        self
    }

    /// Replaces the modifier registry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routeros_wire::{CodecOptions, ModifierRegistry};
    ///
    /// let options = CodecOptions::new().with_modifiers(ModifierRegistry::empty());
    /// assert_eq!(options.modifiers.names().count(), 0);
    /// ```
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierRegistry) -> Self {
        self.modifiers = modifiers;
        self
    }
}
