//! Record encoding.
//!
//! This module provides the [`Encoder`] that turns a [`Record`] into the ordered list of
//! [`Attribute`]s used to build a command.
//!
//! ## Overview
//!
//! Fields are visited in declaration order. A field is emitted unless its value is the
//! zero value for its kind; booleans are always emitted, as `yes` or `no`. Integers are
//! written in decimal and strings verbatim.
//!
//! Integer duration fields (`ttlToSeconds`) are written as plain seconds unless
//! [`CodecOptions::encode_modifiers`](crate::CodecOptions) is set, in which case the
//! modifier's encode transform renders them back into duration notation.
//!
//! ## Usage
//!
//! ```rust
//! use routeros_wire::{record, to_attributes, to_command_string};
//!
//! record! {
//!     #[derive(Default)]
//!     pub struct AddressList {
//!         pub address: String => "address",
//!         pub list: String => "list",
//!         pub comment: String => "comment",
//!         pub disabled: bool => "disabled",
//!     }
//! }
//!
//! let entry = AddressList {
//!     address: "10.0.0.0/8".to_string(),
//!     list: "lan".to_string(),
//!     ..Default::default()
//! };
//!
//! let attributes = to_attributes(&entry).unwrap();
//! assert_eq!(attributes.len(), 3);
//! assert_eq!(
//!     to_command_string(&entry).unwrap(),
//!     "=address=10.0.0.0/8 =list=lan =disabled=no"
//! );
//! ```

use crate::descriptor::{FieldDescriptor, FieldKind, Record};
use crate::modifier::EncodeFn;
use crate::options::CodecOptions;
use crate::sentence::Attribute;
use crate::Result;

/// Encodes records into command attributes.
///
/// Created via [`Encoder::new`] over borrowed [`CodecOptions`].
pub struct Encoder<'a> {
    options: &'a CodecOptions,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a CodecOptions) -> Self {
        Encoder { options }
    }

    /// Encodes `record` into attributes in field declaration order.
    ///
    /// # Errors
    ///
    /// Fails only if a modifier encode transform rejects a value (for example a
    /// negative duration).
    pub fn encode<T: Record>(&self, record: &T) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::with_capacity(T::descriptors().len());

        for descriptor in T::descriptors() {
            if descriptor.wire_key.is_empty() {
                continue;
            }

            let value = record.field(descriptor.name)?;
            if value.is_zero() && descriptor.kind != FieldKind::Bool {
                continue;
            }

            let rendered = match self.modifier_encoder(descriptor) {
                Some(encode) => encode(&value)?,
                None => value.to_wire(),
            };
            tracing::trace!(
                field = descriptor.name,
                key = %descriptor.wire_key,
                value = %rendered,
                "encoded field"
            );
            attributes.push(Attribute::new(descriptor.wire_key.clone(), rendered));
        }

        Ok(attributes)
    }

    /// Encodes `record` into `=key=value` words joined by spaces.
    ///
    /// # Errors
    ///
    /// Same as [`Encoder::encode`].
    pub fn encode_to_string<T: Record>(&self, record: &T) -> Result<String> {
        let words: Vec<String> = self
            .encode(record)?
            .iter()
            .map(Attribute::to_word)
            .collect();
        Ok(words.join(" "))
    }

    fn modifier_encoder(&self, descriptor: &FieldDescriptor) -> Option<EncodeFn> {
        if !self.options.encode_modifiers {
            return None;
        }
        self.options
            .modifiers
            .for_field(descriptor)
            .and_then(|modifier| modifier.encode)
    }
}
