//! # routeros_wire
//!
//! A tag-driven codec that maps flat Rust records to and from RouterOS API sentences.
//!
//! ## What is a sentence?
//!
//! The RouterOS API talks in *sentences*: ordered lists of `key=value` attributes. A
//! reply to one command is a sequence of sentences, and a command is a path followed by
//! `=key=value` attribute words. This crate does not open sockets; it turns the structured
//! sentences a transport produces into typed records, and typed records back into
//! attribute words.
//!
//! ## Key Features
//!
//! - **Declared once per type**: The [`record!`] macro builds a static field descriptor
//!   table; decode and encode are generic over any [`Record`]
//! - **Wire conventions built in**: `yes`/`no` booleans, zero-value omission, and the
//!   `1d2h3m4s` duration notation via the `ttlToSeconds` modifier
//! - **Explicit policies**: Lenient or strict scalar parsing, and how many sentences a
//!   collection requires, are [`CodecOptions`] rather than hidden behavior
//! - **Extensible**: Additional modifiers plug into the [`ModifierRegistry`]
//!
//! ## Quick Start
//!
//! ```rust
//! use routeros_wire::{from_reply, record, to_command_string, Reply, Sentence};
//!
//! record! {
//!     #[derive(Debug, Clone, Default, PartialEq)]
//!     pub struct AddressList {
//!         pub id: String => ".id",
//!         pub address: String => "address",
//!         pub list: String => "list",
//!         pub timeout: i64 => "timeout,ttlToSeconds",
//!         pub disabled: bool => "disabled",
//!     }
//! }
//!
//! let sentence: Sentence = vec![
//!     (".id", "*1"),
//!     ("address", "10.0.0.5"),
//!     ("list", "blocked"),
//!     ("timeout", "1d2h"),
//!     ("disabled", "false"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let entry: AddressList = from_reply(&Reply::new(vec![sentence])).unwrap();
//! assert_eq!(entry.timeout, 93_600);
//!
//! let words = to_command_string(&entry).unwrap();
//! assert_eq!(
//!     words,
//!     "=.id=*1 =address=10.0.0.5 =list=blocked =timeout=93600 =disabled=no"
//! );
//! ```
//!
//! ## Wire rules
//!
//! - **Keys**: a field's wire key is the first token of its tag, or its lower-cased name.
//!   Decoding also accepts the lower-cased name; the first matching pair wins.
//! - **Booleans**: written as `yes`/`no`; `true`/`false` and similar are accepted.
//! - **Zero values**: empty strings and `0` are not encoded; booleans always are.
//! - **Durations**: `[<days>d]<h/m/s duration>`, decoded to seconds and encoded as plain
//!   seconds unless [`CodecOptions::with_encode_modifiers`] is set.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API; malformed input is reported through [`Error`]

pub mod command;
pub mod de;
pub mod descriptor;
pub mod duration;
pub mod error;
pub mod macros;
pub mod modifier;
pub mod options;
pub mod ser;
pub mod sentence;
pub mod value;

pub use command::Command;
pub use de::Decoder;
pub use descriptor::{FieldDescriptor, FieldKind, Record};
pub use duration::{format_duration, parse_duration};
pub use error::{Error, Result};
pub use modifier::{Modifier, ModifierRegistry, TTL_TO_SECONDS};
pub use options::{CodecOptions, CollectionPolicy, ScalarPolicy};
pub use sentence::{Attribute, Pair, Reply, Sentence};
pub use ser::Encoder;
pub use value::{bool_to_wire, parse_bool, Scalar, Value};

/// Decode a reply into a single record, starting from `T::default()`.
///
/// An empty reply yields `T::default()`.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::{from_reply, record, Reply};
///
/// record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Identity {
///         pub name: String,
///     }
/// }
///
/// let identity: Identity = from_reply(&Reply::default()).unwrap();
/// assert_eq!(identity, Identity::default());
/// ```
///
/// # Errors
///
/// Returns [`Error::MultipleSentencesForSingleTarget`] if the reply has more than one
/// sentence, or any field decoding error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reply<T>(reply: &Reply) -> Result<T>
where
    T: Record + Default,
{
    from_reply_with_options(reply, &CodecOptions::default())
}

/// Decode a reply into a single record with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reply_with_options<T>(reply: &Reply, options: &CodecOptions) -> Result<T>
where
    T: Record + Default,
{
    let mut record = T::default();
    Decoder::new(options).decode_into(reply, &mut record)?;
    Ok(record)
}

/// Decode a reply into an existing record.
///
/// An empty reply leaves `record` untouched.
///
/// # Errors
///
/// Same as [`from_reply`].
pub fn from_reply_into<T>(reply: &Reply, record: &mut T) -> Result<()>
where
    T: Record,
{
    from_reply_into_with_options(reply, record, &CodecOptions::default())
}

/// Decode a reply into an existing record with custom options.
pub fn from_reply_into_with_options<T>(
    reply: &Reply,
    record: &mut T,
    options: &CodecOptions,
) -> Result<()>
where
    T: Record,
{
    Decoder::new(options).decode_into(reply, record)
}

/// Decode a reply that must contain exactly one record.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for an empty reply, in addition to the errors of
/// [`from_reply`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reply_required<T>(reply: &Reply) -> Result<T>
where
    T: Record + Default,
{
    from_reply_required_with_options(reply, &CodecOptions::default())
}

/// Decode a reply that must contain exactly one record, with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reply_required_with_options<T>(reply: &Reply, options: &CodecOptions) -> Result<T>
where
    T: Record + Default,
{
    if reply.is_empty() {
        return Err(Error::not_found(format!(
            "no sentence for {}",
            std::any::type_name::<T>()
        )));
    }
    from_reply_with_options(reply, options)
}

/// Decode a reply into a collection of records, one per sentence.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::{from_reply_vec, record, Reply, Sentence};
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Route {
///         pub dst: String => "dst-address",
///     }
/// }
///
/// let reply = Reply::new(vec![
///     vec![("dst-address", "0.0.0.0/0")].into_iter().collect::<Sentence>(),
///     vec![("dst-address", "10.0.0.0/8")].into_iter().collect::<Sentence>(),
/// ]);
/// let routes: Vec<Route> = from_reply_vec(&reply).unwrap();
/// assert_eq!(routes[1].dst, "10.0.0.0/8");
/// ```
///
/// # Errors
///
/// Returns [`Error::NotEnoughSentencesForCollection`] if the reply has one sentence or
/// none. Use [`CollectionPolicy::AllowSingle`] to accept a single sentence.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reply_vec<T>(reply: &Reply) -> Result<Vec<T>>
where
    T: Record + Default,
{
    from_reply_vec_with_options(reply, &CodecOptions::default())
}

/// Decode a reply into a collection of records with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reply_vec_with_options<T>(reply: &Reply, options: &CodecOptions) -> Result<Vec<T>>
where
    T: Record + Default,
{
    Decoder::new(options).decode_vec(reply)
}

/// Decode one sentence into a new record.
///
/// # Errors
///
/// Returns any field decoding error, such as [`Error::MalformedDuration`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_sentence<T>(sentence: &Sentence) -> Result<T>
where
    T: Record + Default,
{
    from_sentence_with_options(sentence, &CodecOptions::default())
}

/// Decode one sentence into a new record with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_sentence_with_options<T>(sentence: &Sentence, options: &CodecOptions) -> Result<T>
where
    T: Record + Default,
{
    let mut record = T::default();
    Decoder::new(options).decode_sentence(sentence, &mut record)?;
    Ok(record)
}

/// Encode a record into attributes in field declaration order.
///
/// # Errors
///
/// Returns an error only if a modifier encode transform rejects a value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_attributes<T>(record: &T) -> Result<Vec<Attribute>>
where
    T: Record,
{
    to_attributes_with_options(record, &CodecOptions::default())
}

/// Encode a record into attributes with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_attributes_with_options<T>(record: &T, options: &CodecOptions) -> Result<Vec<Attribute>>
where
    T: Record,
{
    Encoder::new(options).encode(record)
}

/// Encode a record into `=key=value` words joined by single spaces.
///
/// # Errors
///
/// Same as [`to_attributes`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_command_string<T>(record: &T) -> Result<String>
where
    T: Record,
{
    to_command_string_with_options(record, &CodecOptions::default())
}

/// Encode a record into command words with custom options.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::{record, to_command_string_with_options, CodecOptions};
///
/// record! {
///     #[derive(Default)]
///     pub struct Gre {
///         pub name: String => "name",
///         pub keepalive: i64 => "keepalive,ttlToSeconds",
///     }
/// }
///
/// let gre = Gre { name: "gre1".to_string(), keepalive: 90 };
/// let options = CodecOptions::new().with_encode_modifiers(true);
/// assert_eq!(
///     to_command_string_with_options(&gre, &options).unwrap(),
///     "=name=gre1 =keepalive=1m30s"
/// );
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_command_string_with_options<T>(record: &T, options: &CodecOptions) -> Result<String>
where
    T: Record,
{
    Encoder::new(options).encode_to_string(record)
}
