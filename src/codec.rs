// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between constants, their canonical names and JSON.
//!
//! The functions here are generic over [`Constant`] and are shared by every
//! kind in the crate. They are also reachable through inherent methods and
//! trait impls on each kind, which is usually more convenient:
//!
//! | Function              | Kind-level equivalent         |
//! |-----------------------|-------------------------------|
//! | [`name_or_unknown`]   | `Display`                     |
//! | [`parse_name`]        | `FromStr`                     |
//! | [`to_json`]           | `to_json()`, `Serialize`      |
//! | [`from_json`]         | `from_json()`, `Deserialize`  |
//!
//! The serde impls can only report failures through the serializer's or
//! deserializer's own error type. Use [`to_json`] and [`from_json`] when the
//! [`ErrorKind`](crate::ErrorKind) of a failure matters.

use crate::error::{Error, JsonType, Result, Unrecognized};
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use serde::de::{self, Unexpected, Visitor};
use serde::{ser, Deserializer, Serializer};
use serde_json::Value;

/// A kind of TPM constant: a `u32` newtype with a fixed table of named
/// values.
///
/// The table is a bijection: every value in it has exactly one name, and
/// every name exactly one value. It is plain `'static` data and is never
/// modified, so every function here can be called from any number of
/// threads at once.
pub trait Constant: Copy + Eq + Debug + 'static {
    /// Descriptive noun of this kind, e.g. `ALGORITHM ATTRIBUTE`.
    const KIND: &'static str;

    /// Text displayed for values without a canonical name.
    const UNKNOWN: &'static str;

    /// All named values of this kind, paired with their canonical names.
    const TABLE: &'static [(Self, &'static str)];

    /// Wrap any integer, named or not.
    fn from_raw(raw: u32) -> Self;

    /// The underlying integer.
    fn raw(self) -> u32;

    /// Canonical name of `self`, or `None` if the table doesn't contain it.
    fn name_of(self) -> Option<&'static str>;

    /// Value whose canonical name is `name`. Names are case-sensitive.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(value, _)| *value)
    }

    /// Wrap `raw`, but only if the table contains it.
    fn from_raw_strict(raw: u32) -> Result<Self> {
        let value = Self::from_raw(raw);
        match value.name_of() {
            Some(_) => Ok(value),
            None => Err(invalid_raw::<Self>(raw)),
        }
    }

    /// Iterate over all named values, in table order.
    fn iter() -> impl Iterator<Item = Self> {
        Self::TABLE.iter().map(|(value, _)| *value)
    }
}

/// Canonical name of `value`, or the kind's `UNKNOWN ... VALUE` text.
#[must_use]
pub fn name_or_unknown<T: Constant>(value: T) -> &'static str {
    value.name_of().unwrap_or(T::UNKNOWN)
}

/// Look up a canonical name, failing with [`Error::InvalidValue`].
pub fn parse_name<T: Constant>(name: &str) -> Result<T> {
    T::from_name(name).ok_or_else(|| invalid_name::<T>(name))
}

/// Encode `value` as a JSON string holding its canonical name.
///
/// The output has no surrounding whitespace, e.g. `"TPM2_ALG_RSA"`.
/// Values without a name fail with [`Error::InvalidValue`].
pub fn to_json<T: Constant>(value: T) -> Result<Vec<u8>> {
    let name = value.name_of().ok_or_else(|| invalid_raw::<T>(value.raw()))?;
    Ok(serde_json::to_vec(name)?)
}

/// Decode a JSON string holding a canonical name.
///
/// Input that is not JSON fails with [`Error::Json`]. Any token other than a
/// string fails with [`Error::InvalidType`], and a string that isn't a
/// canonical name of `T` fails with [`Error::InvalidValue`].
pub fn from_json<T: Constant>(bytes: &[u8]) -> Result<T> {
    let token: Value = serde_json::from_slice(bytes)?;
    let found = match token {
        Value::String(name) => return parse_name(&name),
        Value::Null => JsonType::Null,
        Value::Bool(_) => JsonType::Bool,
        Value::Number(_) => JsonType::Number,
        Value::Array(_) => JsonType::Array,
        Value::Object(_) => JsonType::Object,
    };
    log::debug!("rejecting JSON {} for {}", found, T::KIND);
    Err(Error::InvalidType {
        kind: T::KIND,
        found,
    })
}

/// `Serialize` hook shared by all kinds.
pub(crate) fn serialize<T: Constant, S: Serializer>(
    value: T,
    serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    match value.name_of() {
        Some(name) => serializer.serialize_str(name),
        None => Err(ser::Error::custom(invalid_raw::<T>(value.raw()))),
    }
}

/// `Deserialize` hook shared by all kinds.
pub(crate) fn deserialize<'de, T: Constant, D: Deserializer<'de>>(
    deserializer: D,
) -> core::result::Result<T, D::Error> {
    deserializer.deserialize_str(NameVisitor(PhantomData))
}

/// Accepts strings only; every other token is reported by serde's default
/// `invalid_type` handling.
struct NameVisitor<T>(PhantomData<T>);

impl<'de, T: Constant> Visitor<'de> for NameVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a canonical {} name", T::KIND)
    }

    fn visit_str<E: de::Error>(self, name: &str) -> core::result::Result<T, E> {
        match T::from_name(name) {
            Some(value) => Ok(value),
            None => {
                log::debug!("rejecting unknown {} name {:?}", T::KIND, name);
                Err(E::invalid_value(Unexpected::Str(name), &self))
            }
        }
    }
}

fn invalid_raw<T: Constant>(raw: u32) -> Error {
    log::debug!("rejecting unnamed {} value {:#x}", T::KIND, raw);
    Error::InvalidValue {
        kind: T::KIND,
        value: Unrecognized::Raw(raw),
    }
}

fn invalid_name<T: Constant>(name: &str) -> Error {
    log::debug!("rejecting unknown {} name {:?}", T::KIND, name);
    Error::InvalidValue {
        kind: T::KIND,
        value: Unrecognized::Name(name.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, Capability, ErrorKind};

    #[test]
    fn name_lookup_is_total() {
        assert_eq!(Algorithm::RSA.name_of(), Some("TPM2_ALG_RSA"));
        assert_eq!(Algorithm(0x7fff).name_of(), None);
        assert_eq!(name_or_unknown(Algorithm(0x7fff)), "UNKNOWN ALGORITHM VALUE");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Capability::from_name("TPM2_CAP_ALGS"), Some(Capability::ALGS));
        assert_eq!(Capability::from_name("tpm2_cap_algs"), None);
        assert_eq!(Capability::from_name("ALGS"), None);
        assert_eq!(Capability::from_name(" TPM2_CAP_ALGS"), None);
    }

    #[test]
    fn strict_raw_conversion() {
        assert_eq!(Algorithm::from_raw_strict(0x0023).unwrap(), Algorithm::ECC);

        let err = Algorithm::from_raw_strict(0x0002).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(matches!(
            err,
            Error::InvalidValue {
                kind: "ALGORITHM",
                value: Unrecognized::Raw(0x0002),
            }
        ));
    }

    #[test]
    fn to_json_has_no_whitespace() {
        assert_eq!(to_json(Capability::HANDLES).unwrap(), br#""TPM2_CAP_HANDLES""#);
    }

    #[test]
    fn from_json_classifies_token_types() {
        let cases = [
            ("null", JsonType::Null),
            ("true", JsonType::Bool),
            ("false", JsonType::Bool),
            ("1", JsonType::Number),
            ("-0.5", JsonType::Number),
            (r#"["TPM2_ALG_RSA"]"#, JsonType::Array),
            (r#"{"name": "TPM2_ALG_RSA"}"#, JsonType::Object),
        ];

        for (input, expected) in cases {
            match from_json::<Algorithm>(input.as_bytes()) {
                Err(Error::InvalidType { kind, found }) => {
                    assert_eq!(kind, "ALGORITHM");
                    assert_eq!(found, expected);
                }
                other => panic!("unexpected result {other:?} for {input:?}"),
            }
        }
    }

    #[test]
    fn from_json_accepts_surrounding_whitespace() {
        assert_eq!(
            from_json::<Algorithm>(b" \"TPM2_ALG_SHA256\"\n").unwrap(),
            Algorithm::SHA256
        );
    }

    #[test]
    fn from_json_passes_syntax_errors_through() {
        for input in ["", r#""TPM2_ALG_RSA"#, "TPM2_ALG_RSA", r#""a" "b""#] {
            let err = from_json::<Algorithm>(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Json, "input {input:?}");
        }
    }

    #[test]
    fn from_json_rejects_unknown_names() {
        let err = from_json::<Algorithm>(br#""NOT_A_VALID_VALUE""#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                kind: "ALGORITHM",
                value: Unrecognized::Name(ref name),
            } if name == "NOT_A_VALID_VALUE"
        ));
    }

    #[test]
    fn kinds_are_not_interchangeable() {
        let err = from_json::<Capability>(br#""TPM2_ALG_RSA""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
