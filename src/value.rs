//! Scalar values carried by record fields.
//!
//! Records are flat: every field is a string, a boolean or an integer. This module
//! provides the dynamic [`Value`] used between the codec and a record's accessors, and the
//! [`Scalar`] trait that ties a Rust field type to its [`FieldKind`].
//!
//! ## Boolean tokens
//!
//! RouterOS writes booleans as `yes` / `no`. [`bool_to_wire`] produces those tokens and
//! [`parse_bool`] accepts them together with the common `true` / `false` spellings.
//!
//! ```rust
//! use routeros_wire::{bool_to_wire, parse_bool};
//!
//! assert_eq!(bool_to_wire(true), "yes");
//! assert_eq!(parse_bool("yes"), Some(true));
//! assert_eq!(parse_bool("false"), Some(false));
//! assert_eq!(parse_bool("maybe"), None);
//! ```

use crate::descriptor::FieldKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically-typed scalar field value.
///
/// Integers are held as `Integer` when they fit an `i64`; only unsigned values past
/// `i64::MAX` use `Unsigned`. [`Value::from_integer`] keeps that form.
///
/// # Examples
///
/// ```rust
/// use routeros_wire::{FieldKind, Value};
///
/// let value = Value::from("ether1");
/// assert_eq!(value.kind(), FieldKind::String);
/// assert!(!value.is_zero());
/// assert!(Value::Integer(0).is_zero());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    String(String),
}

impl Value {
    /// The zero value of `kind`: empty string, `false` or `0`.
    #[must_use]
    pub fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Value::String(String::new()),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::Integer => Value::Integer(0),
        }
    }

    /// Builds an integer value in its canonical form.
    ///
    /// Returns `None` outside `i64::MIN..=u64::MAX`.
    #[must_use]
    pub fn from_integer(n: i128) -> Option<Self> {
        match i64::try_from(n) {
            Ok(i) => Some(Value::Integer(i)),
            Err(_) => u64::try_from(n).ok().map(Value::Unsigned),
        }
    }

    /// Parses a decimal integer in `i64::MIN..=u64::MAX`.
    ///
    /// ```rust
    /// use routeros_wire::Value;
    ///
    /// assert_eq!(Value::parse_integer("-3"), Some(Value::Integer(-3)));
    /// assert_eq!(
    ///     Value::parse_integer("18446744073709551615"),
    ///     Some(Value::Unsigned(u64::MAX))
    /// );
    /// assert_eq!(Value::parse_integer("auto"), None);
    /// ```
    #[must_use]
    pub fn parse_integer(raw: &str) -> Option<Self> {
        raw.parse::<i128>().ok().and_then(Value::from_integer)
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Bool(_) => FieldKind::Bool,
            Value::Integer(_) | Value::Unsigned(_) => FieldKind::Integer,
            Value::String(_) => FieldKind::String,
        }
    }

    /// Returns `true` if this is the zero value for its kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Integer(i) => *i == 0,
            Value::Unsigned(u) => *u == 0,
            Value::String(s) => s.is_empty(),
        }
    }

    /// Renders the value the way it is written on the wire.
    ///
    /// Booleans become `yes` / `no`, integers their decimal form.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Value::Bool(b) => bool_to_wire(*b).to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Unsigned(u) => u.to_string(),
            Value::String(s) => s.clone(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(i) => u64::try_from(*i).ok(),
            Value::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Any integer value, widened.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Value::Integer(i) => Some(i128::from(*i)),
            Value::Unsigned(u) => Some(i128::from(*u)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Unsigned(u) => write!(f, "{}", u),
            Value::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Unsigned(u),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// The wire token for a boolean: `yes` or `no`.
#[must_use]
pub const fn bool_to_wire(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Parses a boolean token.
///
/// Accepts `yes` / `no` and the usual `1`, `t`, `true`, `0`, `f`, `false` spellings
/// (with `TRUE` / `True` style capitalisation). Returns `None` for anything else.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "no" | "NO" | "No" => Some(false),
        _ => None,
    }
}

/// A Rust type that can back a record field.
///
/// Implemented for `String`, `bool` and the primitive integer types. Narrow integer
/// types reject decoded values outside their range with [`Error::TypeMismatch`].
pub trait Scalar: Sized {
    /// The wire kind this type is decoded and encoded as.
    const KIND: FieldKind;

    fn to_value(&self) -> Value;

    /// Converts a decoded value into `Self`; `field` names the destination in errors.
    fn from_value(field: &str, value: Value) -> Result<Self>;
}

impl Scalar for String {
    const KIND: FieldKind = FieldKind::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(field, "string", &other.to_string())),
        }
    }
}

impl Scalar for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch(field, "bool", &other.to_string())),
        }
    }
}

macro_rules! impl_scalar_integer {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn to_value(&self) -> Value {
                    // Every implementing type is at most 64 bits wide.
                    let n = *self as i128;
                    match i64::try_from(n) {
                        Ok(i) => Value::Integer(i),
                        Err(_) => Value::Unsigned(n as u64),
                    }
                }

                fn from_value(field: &str, value: Value) -> Result<Self> {
                    match value.as_i128() {
                        Some(n) => <$ty>::try_from(n).map_err(|_| {
                            Error::type_mismatch(field, stringify!($ty), &format!("integer {}", n))
                        }),
                        None => Err(Error::type_mismatch(field, stringify!($ty), &value.to_string())),
                    }
                }
            }
        )*
    };
}

impl_scalar_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert!(Value::zero(FieldKind::String).is_zero());
        assert!(Value::zero(FieldKind::Bool).is_zero());
        assert!(Value::zero(FieldKind::Integer).is_zero());
        assert!(!Value::Integer(-1).is_zero());
        assert!(!Value::Bool(true).is_zero());
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(Value::Bool(true).to_wire(), "yes");
        assert_eq!(Value::Bool(false).to_wire(), "no");
        assert_eq!(Value::Integer(-42).to_wire(), "-42");
        assert_eq!(Value::from("a b").to_wire(), "a b");
    }

    #[test]
    fn test_parse_bool_spellings() {
        for token in ["yes", "true", "True", "1", "t"] {
            assert_eq!(parse_bool(token), Some(true), "{}", token);
        }
        for token in ["no", "false", "FALSE", "0", "f"] {
            assert_eq!(parse_bool(token), Some(false), "{}", token);
        }
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("on"), None);
    }

    #[test]
    fn test_scalar_integer_range() {
        assert_eq!(u16::from_value("mtu", Value::Integer(1500)).unwrap(), 1500);
        let err = u16::from_value("mtu", Value::Integer(70_000)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
        assert!(u32::from_value("mtu", Value::Integer(-1)).is_err());
    }

    #[test]
    fn test_scalar_u64_past_i64_max() {
        let value = u64::MAX.to_value();
        assert_eq!(value, Value::Unsigned(u64::MAX));
        assert_eq!(value.to_wire(), "18446744073709551615");
        assert_eq!(u64::from_value("bytes", value.clone()).unwrap(), u64::MAX);
        assert!(i64::from_value("bytes", value).is_err());

        assert_eq!(1u64.to_value(), Value::Integer(1));
        assert_eq!(Value::from(u64::MAX), Value::Unsigned(u64::MAX));
        assert_eq!(
            u64::from_value("bytes", Value::Integer(i64::MAX)).unwrap(),
            i64::MAX as u64
        );
        assert_eq!(i64::MIN.to_value(), Value::Integer(i64::MIN));
    }

    #[test]
    fn test_parse_integer_range() {
        assert_eq!(Value::parse_integer("0"), Some(Value::Integer(0)));
        assert_eq!(
            Value::parse_integer("-9223372036854775808"),
            Some(Value::Integer(i64::MIN))
        );
        assert_eq!(
            Value::parse_integer("9223372036854775808"),
            Some(Value::Unsigned(1 << 63))
        );
        assert_eq!(Value::parse_integer("18446744073709551616"), None);
        assert_eq!(Value::parse_integer("-9223372036854775809"), None);
        assert_eq!(Value::parse_integer(""), None);
    }

    #[test]
    fn test_scalar_kind_mismatch() {
        let err = String::from_value("name", Value::Integer(1)).unwrap_err();
        assert_eq!(err, Error::type_mismatch("name", "string", "1"));
        assert!(bool::from_value("disabled", Value::from("yes")).is_err());
    }

    #[test]
    fn test_serde_untagged() {
        let json = serde_json::to_string(&Value::from("ether1")).unwrap();
        assert_eq!(json, "\"ether1\"");
        let value: Value = serde_json::from_str("42").unwrap();
        assert_eq!(value, Value::Integer(42));
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value, Value::Unsigned(u64::MAX));
    }
}
