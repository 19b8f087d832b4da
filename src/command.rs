//! Command word building.
//!
//! A RouterOS command is a list of words: the command path, then attribute words
//! (`=key=value`) and query words (`?key=value`). [`Command`] collects those words, either
//! one at a time or from an encoded [`Record`].
//!
//! ```rust
//! use routeros_wire::Command;
//!
//! let words = Command::new("/ip/address/print")
//!     .query(".id", "*1")
//!     .into_words();
//! assert_eq!(words, vec!["/ip/address/print", "?.id=*1"]);
//! ```

use crate::descriptor::Record;
use crate::options::CodecOptions;
use crate::ser::Encoder;
use crate::value::bool_to_wire;
use crate::Result;

/// A command path plus its attribute and query words, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    words: Vec<String>,
}

impl Command {
    pub fn new(path: &str) -> Self {
        Command {
            words: vec![path.to_string()],
        }
    }

    /// Appends an `=key=value` attribute word.
    #[must_use]
    pub fn attribute(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.words.push(format!("={}={}", key, value.as_ref()));
        self
    }

    /// Appends a boolean attribute as `yes` / `no`.
    ///
    /// ```rust
    /// use routeros_wire::Command;
    ///
    /// let words = Command::new("/interface/gre/set")
    ///     .attribute(".id", "*3")
    ///     .flag("disabled", true)
    ///     .into_words();
    /// assert_eq!(words[2], "=disabled=yes");
    /// ```
    #[must_use]
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.attribute(key, bool_to_wire(value))
    }

    /// Appends a `?key=value` query word.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.words.push(format!("?{}={}", key, value.as_ref()));
        self
    }

    /// Appends the attributes of `record`, encoded with default options.
    ///
    /// # Errors
    ///
    /// Propagates encoder errors.
    pub fn record<T: Record>(self, record: &T) -> Result<Self> {
        self.record_with_options(record, &CodecOptions::default())
    }

    /// Appends the attributes of `record`, encoded with `options`.
    ///
    /// # Errors
    ///
    /// Propagates encoder errors, such as a negative duration when
    /// [`CodecOptions::encode_modifiers`] is set.
    pub fn record_with_options<T: Record>(
        mut self,
        record: &T,
        options: &CodecOptions,
    ) -> Result<Self> {
        let attributes = Encoder::new(options).encode(record)?;
        self.words
            .extend(attributes.iter().map(|attribute| attribute.to_word()));
        Ok(self)
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.words[0]
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::record! {
        #[derive(Default)]
        struct IpAddress {
            address: String => "address",
            interface: String => "interface",
            network: String => "network",
        }
    }

    #[test]
    fn test_add_command_from_record() {
        let addr = IpAddress {
            address: "192.168.88.1/24".to_string(),
            interface: "bridge".to_string(),
            ..Default::default()
        };
        let command = Command::new("/ip/address/add").record(&addr).unwrap();
        assert_eq!(command.path(), "/ip/address/add");
        assert_eq!(
            command.words(),
            &[
                "/ip/address/add".to_string(),
                "=address=192.168.88.1/24".to_string(),
                "=interface=bridge".to_string(),
            ]
        );
    }

    #[test]
    fn test_set_command_mixes_words() {
        let words = Command::new("/ip/address/set")
            .attribute(".id", "*7")
            .attribute("address", String::from("10.1.1.1/30"))
            .flag("disabled", false)
            .into_words();
        assert_eq!(
            words,
            vec![
                "/ip/address/set",
                "=.id=*7",
                "=address=10.1.1.1/30",
                "=disabled=no"
            ]
        );
    }
}
