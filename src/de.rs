//! Sentence decoding.
//!
//! This module provides the [`Decoder`] that populates [`Record`]s from the sentences
//! of a [`Reply`].
//!
//! ## Overview
//!
//! For every field descriptor of the destination type the decoder looks for the first
//! pair whose key equals either the field's wire key or its lower-cased name, then
//! converts the raw value according to the field's kind:
//!
//! - **string**: stored verbatim
//! - **boolean**: `yes`/`no`/`true`/`false` and friends; see [`parse_bool`]
//! - **integer**: decimal, from `i64::MIN` up to `u64::MAX`
//!
//! A field whose tag names a registered modifier for its kind (such as `ttlToSeconds` on
//! an integer) uses the modifier's transform instead. Modifiers of another kind are ignored.
//!
//! Fields with no matching pair keep their current value.
//!
//! ## Destination shapes
//!
//! - A single record accepts zero or one sentence. Zero leaves the record untouched.
//! - A collection requires more than one sentence by default; see
//!   [`CollectionPolicy`](crate::CollectionPolicy).
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use routeros_wire::{from_reply, record, Reply, Sentence};
//!
//! record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct IpAddress {
//!         pub id: String => ".id",
//!         pub address: String,
//!     }
//! }
//!
//! let sentence: Sentence = vec![(".id", "*1"), ("address", "10.0.0.1/24")]
//!     .into_iter()
//!     .collect();
//! let addr: IpAddress = from_reply(&Reply::new(vec![sentence])).unwrap();
//! assert_eq!(addr.id, "*1");
//! ```

use crate::descriptor::{FieldDescriptor, FieldKind, Record};
use crate::options::{CodecOptions, ScalarPolicy};
use crate::sentence::{Reply, Sentence};
use crate::value::parse_bool;
use crate::{Error, Result, Value};

/// Decodes sentences into records.
///
/// Created via [`Decoder::new`] over borrowed [`CodecOptions`]. Decoding touches only its
/// arguments, so one decoder may be shared freely.
pub struct Decoder<'a> {
    options: &'a CodecOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(options: &'a CodecOptions) -> Self {
        Decoder { options }
    }

    /// Decodes a reply into a single record.
    ///
    /// An empty reply leaves `record` untouched and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultipleSentencesForSingleTarget`] for replies with more than one
    /// sentence, or any error raised while decoding the sentence.
    pub fn decode_into<T: Record>(&self, reply: &Reply, record: &mut T) -> Result<()> {
        tracing::debug!(sentences = reply.len(), "decoding reply into single record");
        match reply.sentences.as_slice() {
            [] => Ok(()),
            [sentence] => self.decode_sentence(sentence, record),
            sentences => Err(Error::MultipleSentencesForSingleTarget {
                count: sentences.len(),
            }),
        }
    }

    /// Decodes every sentence of a reply into a new record, preserving reply order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughSentencesForCollection`] when the reply has fewer
    /// sentences than the collection policy requires. An empty reply is always rejected.
    pub fn decode_vec<T: Record + Default>(&self, reply: &Reply) -> Result<Vec<T>> {
        tracing::debug!(sentences = reply.len(), "decoding reply into collection");
        let required = self.options.collection_policy.min_sentences();
        if reply.len() < required {
            return Err(Error::NotEnoughSentencesForCollection {
                count: reply.len(),
                required,
            });
        }

        reply
            .sentences
            .iter()
            .map(|sentence| {
                let mut record = T::default();
                self.decode_sentence(sentence, &mut record)?;
                Ok(record)
            })
            .collect()
    }

    /// Decodes one sentence into `record`.
    ///
    /// All values are converted before any field is written, so a conversion error
    /// leaves `record` unchanged.
    pub fn decode_sentence<T: Record>(&self, sentence: &Sentence, record: &mut T) -> Result<()> {
        let mut decoded = Vec::with_capacity(T::descriptors().len());
        for descriptor in T::descriptors() {
            // First match in sentence order wins.
            if let Some(pair) = sentence.iter().find(|pair| descriptor.matches(&pair.key)) {
                let value = self.decode_value(descriptor, &pair.key, &pair.value)?;
                tracing::trace!(field = descriptor.name, key = %pair.key, %value, "decoded field");
                decoded.push((descriptor.name, value));
            }
        }

        for (name, value) in decoded {
            record.set_field(name, value)?;
        }
        Ok(())
    }

    fn decode_value(&self, descriptor: &FieldDescriptor, key: &str, raw: &str) -> Result<Value> {
        if let Some(modifier) = self.options.modifiers.for_field(descriptor) {
            return (modifier.decode)(raw);
        }

        let parsed = match descriptor.kind {
            FieldKind::String => return Ok(Value::String(raw.to_string())),
            FieldKind::Bool => parse_bool(raw).map(Value::Bool),
            FieldKind::Integer => Value::parse_integer(raw),
        };

        match (parsed, self.options.scalar_policy) {
            (Some(value), _) => Ok(value),
            (None, ScalarPolicy::Lenient) => {
                tracing::warn!(
                    field = descriptor.name,
                    key,
                    value = raw,
                    kind = %descriptor.kind,
                    "unparsable value, using zero value"
                );
                Ok(Value::zero(descriptor.kind))
            }
            (None, ScalarPolicy::Strict) => Err(Error::invalid_scalar(key, descriptor.kind, raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CollectionPolicy;

    crate::record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Entry {
            id: String => ".id",
            name: String,
            disabled: bool => "disabled",
            mtu: i64 => "mtu",
            timeout: i64 => "timeout,ttlToSeconds",
            bytes: u64 => "bytes",
        }
    }

    crate::record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Keepalive {
            keepalive: String => "keepalive,ttlToSeconds",
            dynamic: bool => "dynamic,ttlToSeconds",
        }
    }

    fn sentence(pairs: &[(&str, &str)]) -> Sentence {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_decode_sentence_all_kinds() {
        let options = CodecOptions::new();
        let mut entry = Entry::default();
        Decoder::new(&options)
            .decode_sentence(
                &sentence(&[
                    (".id", "*A"),
                    ("name", "gre1"),
                    ("disabled", "yes"),
                    ("mtu", "1476"),
                    ("timeout", "1d2h"),
                ]),
                &mut entry,
            )
            .unwrap();

        assert_eq!(
            entry,
            Entry {
                id: "*A".to_string(),
                name: "gre1".to_string(),
                disabled: true,
                mtu: 1476,
                timeout: 93_600,
                bytes: 0,
            }
        );
    }

    #[test]
    fn test_unsigned_counter_past_i64_max() {
        let options = CodecOptions::strict();
        let mut entry = Entry::default();
        Decoder::new(&options)
            .decode_sentence(&sentence(&[("bytes", "18446744073709551615")]), &mut entry)
            .unwrap();
        assert_eq!(entry.bytes, u64::MAX);

        let err = Decoder::new(&options)
            .decode_sentence(&sentence(&[("bytes", "18446744073709551616")]), &mut entry)
            .unwrap_err();
        assert_eq!(
            err,
            Error::invalid_scalar("bytes", FieldKind::Integer, "18446744073709551616")
        );
    }

    #[test]
    fn test_duration_modifier_ignored_on_other_kinds() {
        let options = CodecOptions::strict();
        let mut record = Keepalive::default();
        Decoder::new(&options)
            .decode_sentence(
                &sentence(&[("keepalive", "10s,10"), ("dynamic", "yes")]),
                &mut record,
            )
            .unwrap();
        assert_eq!(record.keepalive, "10s,10");
        assert!(record.dynamic);
    }

    #[test]
    fn test_first_match_wins() {
        let options = CodecOptions::new();
        let mut entry = Entry::default();
        Decoder::new(&options)
            .decode_sentence(&sentence(&[("name", "a"), ("name", "b")]), &mut entry)
            .unwrap();
        assert_eq!(entry.name, "a");
    }

    #[test]
    fn test_missing_fields_are_untouched() {
        let options = CodecOptions::new();
        let mut entry = Entry {
            name: "keep".to_string(),
            ..Default::default()
        };
        Decoder::new(&options)
            .decode_sentence(&sentence(&[("mtu", "1500")]), &mut entry)
            .unwrap();
        assert_eq!(entry.name, "keep");
        assert_eq!(entry.mtu, 1500);
    }

    #[test]
    fn test_lenient_scalars_decode_to_zero() {
        let options = CodecOptions::new();
        let mut entry = Entry {
            mtu: 9000,
            disabled: true,
            ..Default::default()
        };
        Decoder::new(&options)
            .decode_sentence(
                &sentence(&[("mtu", "auto"), ("disabled", "maybe")]),
                &mut entry,
            )
            .unwrap();
        assert_eq!(entry.mtu, 0);
        assert!(!entry.disabled);
    }

    #[test]
    fn test_strict_scalars_fail() {
        let options = CodecOptions::strict();
        let mut entry = Entry::default();
        let err = Decoder::new(&options)
            .decode_sentence(&sentence(&[("mtu", "auto")]), &mut entry)
            .unwrap_err();
        assert_eq!(err, Error::invalid_scalar("mtu", FieldKind::Integer, "auto"));
    }

    #[test]
    fn test_malformed_duration_is_fatal_and_atomic() {
        let options = CodecOptions::new();
        let mut entry = Entry::default();
        let err = Decoder::new(&options)
            .decode_sentence(
                &sentence(&[("name", "gre1"), ("timeout", "never")]),
                &mut entry,
            )
            .unwrap_err();
        assert!(matches!(err, Error::MalformedDuration { .. }));
        assert_eq!(entry, Entry::default());
    }

    #[test]
    fn test_decode_into_shapes() {
        let options = CodecOptions::new();
        let decoder = Decoder::new(&options);
        let mut entry = Entry {
            name: "untouched".to_string(),
            ..Default::default()
        };

        decoder.decode_into(&Reply::default(), &mut entry).unwrap();
        assert_eq!(entry.name, "untouched");

        let two = Reply::new(vec![sentence(&[("name", "a")]), sentence(&[("name", "b")])]);
        assert_eq!(
            decoder.decode_into(&two, &mut entry).unwrap_err(),
            Error::MultipleSentencesForSingleTarget { count: 2 }
        );
    }

    #[test]
    fn test_decode_vec_policies() {
        let one = Reply::new(vec![sentence(&[("name", "a")])]);

        let options = CodecOptions::new();
        let err = Decoder::new(&options).decode_vec::<Entry>(&one).unwrap_err();
        assert_eq!(
            err,
            Error::NotEnoughSentencesForCollection {
                count: 1,
                required: 2
            }
        );

        let options = CodecOptions::new().with_collection_policy(CollectionPolicy::AllowSingle);
        let entries = Decoder::new(&options).decode_vec::<Entry>(&one).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(Decoder::new(&options)
            .decode_vec::<Entry>(&Reply::default())
            .is_err());
    }
}
