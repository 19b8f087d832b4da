//! Field modifiers: named wire-format coercions.
//!
//! A modifier listed in a field's tag changes how the wire value is turned into the
//! field value (decode) and, optionally, how the field value is written back (encode).
//! The [`ModifierRegistry`] maps modifier names to their transforms so new coercions can
//! be added without touching the decoder or encoder.
//!
//! Each modifier applies to one [`FieldKind`]. A tag token naming a modifier of another
//! kind is ignored, so the field decodes and encodes by its base kind.
//!
//! The only built-in modifier is [`TTL_TO_SECONDS`]: the wire carries a duration such as
//! `1d2h3m4s` and the field stores whole seconds.
//!
//! ## Examples
//!
//! ```rust
//! use routeros_wire::{FieldKind, ModifierRegistry, Result, Value};
//!
//! fn hex(raw: &str) -> Result<Value> {
//!     i64::from_str_radix(raw.trim_start_matches("0x"), 16)
//!         .map(Value::Integer)
//!         .map_err(routeros_wire::Error::custom)
//! }
//!
//! let mut registry = ModifierRegistry::default();
//! registry.register("hex", FieldKind::Integer, hex, None);
//!
//! let modifier = registry.get("hex").unwrap();
//! assert_eq!((modifier.decode)("0x1f").unwrap(), Value::Integer(31));
//! ```

use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::duration::{format_duration, parse_duration};
use crate::{Error, Result, Value};
use indexmap::IndexMap;
use std::fmt;

/// Tag token marking an integer field whose wire value is a duration.
pub const TTL_TO_SECONDS: &str = "ttlToSeconds";

/// Turns a raw wire value into a field value.
pub type DecodeFn = fn(&str) -> Result<Value>;

/// Renders a field value as a wire value.
pub type EncodeFn = fn(&Value) -> Result<String>;

/// A registered modifier.
#[derive(Clone)]
pub struct Modifier {
    pub name: String,
    /// The only field kind this modifier applies to.
    pub kind: FieldKind,
    pub decode: DecodeFn,
    /// `None` leaves encoding to the field's base kind.
    pub encode: Option<EncodeFn>,
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("encode", &self.encode.is_some())
            .finish_non_exhaustive()
    }
}

/// Registry of modifiers by name, in registration order.
#[derive(Clone, Debug)]
pub struct ModifierRegistry {
    modifiers: IndexMap<String, Modifier>,
}

impl ModifierRegistry {
    /// Creates a registry with no modifiers, not even the built-ins.
    #[must_use]
    pub fn empty() -> Self {
        ModifierRegistry {
            modifiers: IndexMap::new(),
        }
    }

    /// Registers `name`, replacing any earlier modifier with the same name.
    pub fn register(
        &mut self,
        name: &str,
        kind: FieldKind,
        decode: DecodeFn,
        encode: Option<EncodeFn>,
    ) {
        self.modifiers.insert(
            name.to_string(),
            Modifier {
                name: name.to_string(),
                kind,
                decode,
                encode,
            },
        );
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.get(name)
    }

    /// The first modifier in the field's tag that this registry knows about and that
    /// applies to the field's kind.
    ///
    /// Unknown tag tokens, and modifiers registered for another kind, are skipped.
    #[must_use]
    pub fn for_field(&self, descriptor: &FieldDescriptor) -> Option<&Modifier> {
        descriptor
            .modifiers
            .iter()
            .filter_map(|name| self.get(name))
            .find(|modifier| modifier.kind == descriptor.kind)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        let mut registry = ModifierRegistry::empty();
        registry.register(
            TTL_TO_SECONDS,
            FieldKind::Integer,
            decode_ttl,
            Some(encode_ttl),
        );
        registry
    }
}

fn decode_ttl(raw: &str) -> Result<Value> {
    parse_duration(raw).map(Value::Integer)
}

fn encode_ttl(value: &Value) -> Result<String> {
    match value {
        Value::Integer(seconds) => format_duration(*seconds),
        Value::Unsigned(seconds) => Err(Error::malformed_duration(
            &seconds.to_string(),
            "out of range",
        )),
        other => Err(Error::type_mismatch(
            TTL_TO_SECONDS,
            "integer",
            &other.to_string(),
        )),
    }
}
