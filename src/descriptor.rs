//! Per-type field metadata.
//!
//! Every [`Record`] exposes an ordered table of [`FieldDescriptor`]s, one per declared
//! field. A descriptor is resolved from the field's name, its Rust type and an optional
//! tag string of the form `"<wire-key>[,<modifier>...]"`:
//!
//! - the first comma-separated token is the wire key; when empty, the lower-cased
//!   field name is used instead
//! - every following token is a modifier name such as `ttlToSeconds`
//!
//! Tables are built once per type by the [`record!`](crate::record) macro and shared by
//! all values of that type.
//!
//! ```rust
//! use routeros_wire::{FieldDescriptor, FieldKind};
//!
//! let id = FieldDescriptor::resolve("Id", ".id", FieldKind::String);
//! assert_eq!(id.wire_key, ".id");
//!
//! let iface = FieldDescriptor::resolve("Interface", "", FieldKind::String);
//! assert_eq!(iface.wire_key, "interface");
//! ```

use crate::{Result, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar kind of a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Bool,
    Integer,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::String => "string",
            FieldKind::Bool => "boolean",
            FieldKind::Integer => "integer",
        })
    }
}

/// Resolved metadata for one record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field's programmatic name.
    pub name: &'static str,
    /// The lower-cased field name, also accepted as a key when decoding.
    pub path: String,
    /// The attribute name used on the wire.
    pub wire_key: String,
    pub kind: FieldKind,
    /// Modifier names in tag order. Unknown names are kept and ignored by the codec.
    pub modifiers: Vec<String>,
}

impl FieldDescriptor {
    /// Resolves a descriptor from a field name, a tag string and a kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routeros_wire::{FieldDescriptor, FieldKind};
    ///
    /// let ttl = FieldDescriptor::resolve("timeout", "timeout,ttlToSeconds", FieldKind::Integer);
    /// assert_eq!(ttl.wire_key, "timeout");
    /// assert!(ttl.has_modifier("ttlToSeconds"));
    /// ```
    #[must_use]
    pub fn resolve(name: &'static str, tag: &str, kind: FieldKind) -> Self {
        let mut tokens = tag.split(',');
        let path = name.to_lowercase();
        let wire_key = match tokens.next() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => path.clone(),
        };
        let modifiers = tokens
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        FieldDescriptor {
            name,
            path,
            wire_key,
            kind,
            modifiers,
        }
    }

    /// Returns `true` if `key` addresses this field, either by wire key or by lower-cased name.
    #[inline]
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        key == self.wire_key || key == self.path
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

/// A flat record that can be decoded from and encoded to sentences.
///
/// Implementations are normally generated by [`record!`](crate::record), which builds
/// the descriptor table and the accessors from one declaration.
pub trait Record {
    /// The field descriptors of this type, in declaration order.
    fn descriptors() -> &'static [FieldDescriptor];

    /// Reads the field called `name`.
    fn field(&self, name: &str) -> Result<Value>;

    /// Writes the field called `name`.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownField` for undeclared names and `TypeMismatch` when `value`
    /// does not fit the field's Rust type.
    fn set_field(&mut self, name: &str, value: Value) -> Result<()>;
}
