//! Structured sentences and replies.
//!
//! The transport hands the codec replies that are already split into sentences, each an
//! ordered list of `key=value` [`Pair`]s. Keys are not guaranteed to be unique, so a
//! [`Sentence`] is a list rather than a map and lookups return the first match.
//!
//! ## Examples
//!
//! ```rust
//! use routeros_wire::{Reply, Sentence};
//!
//! let sentence: Sentence = vec![(".id", "*1"), ("address", "10.0.0.1/24")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(sentence.get("address"), Some("10.0.0.1/24"));
//!
//! let reply = Reply::new(vec![sentence]);
//! assert_eq!(reply.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// One `key=value` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Pair {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Renders the pair as a command attribute word, `=<key>=<value>`.
    ///
    /// ```rust
    /// use routeros_wire::Attribute;
    ///
    /// assert_eq!(Attribute::new("disabled", "no").to_word(), "=disabled=no");
    /// ```
    #[must_use]
    pub fn to_word(&self) -> String {
        format!("={}={}", self.key, self.value)
    }
}

/// An encoded record attribute; the same shape as a sentence pair.
pub type Attribute = Pair;

/// An ordered sequence of pairs as received from (or sent to) the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(Vec<Pair>);

impl Sentence {
    #[must_use]
    pub fn new() -> Self {
        Sentence(Vec::new())
    }

    /// Appends a pair, keeping any earlier pair with the same key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(Pair::new(key, value));
    }

    /// Returns the value of the first pair with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the pairs in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.0.iter()
    }
}

impl From<Vec<Pair>> for Sentence {
    fn from(pairs: Vec<Pair>) -> Self {
        Sentence(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Sentence {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Sentence(iter.into_iter().map(|(k, v)| Pair::new(k, v)).collect())
    }
}

impl IntoIterator for Sentence {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The structured reply to one command.
///
/// `sentences` holds the data sentences (`!re`) in arrival order. `done` is the
/// terminating sentence (`!done`), which carries attributes such as `ret` for commands
/// that create items. Only `sentences` is considered when decoding records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub done: Sentence,
}

impl Reply {
    #[must_use]
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Reply {
            sentences,
            done: Sentence::new(),
        }
    }

    #[must_use]
    pub fn with_done(mut self, done: Sentence) -> Self {
        self.done = done;
        self
    }

    /// The `ret` attribute of the done sentence, e.g. the id of a newly created item.
    ///
    /// ```rust
    /// use routeros_wire::{Reply, Sentence};
    ///
    /// let done: Sentence = vec![("ret", "*2A")].into_iter().collect();
    /// let reply = Reply::default().with_done(done);
    /// assert_eq!(reply.ret(), Some("*2A"));
    /// ```
    #[must_use]
    pub fn ret(&self) -> Option<&str> {
        self.done.get("ret")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
