// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Result type of the fallible conversions in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced while converting constants to or from their wire form.
#[derive(Debug, Error)]
pub enum Error {
    /// The value has no canonical name, or the name has no value.
    #[error("{value} is not a valid {kind} value")]
    InvalidValue {
        /// Noun of the kind that rejected the input, e.g. `ALGORITHM`.
        kind: &'static str,
        /// The rejected input.
        value: Unrecognized,
    },

    /// The JSON token is not a string.
    #[error("expected a JSON string for {kind}, found {found}")]
    InvalidType {
        /// Noun of the kind that rejected the input, e.g. `ALGORITHM`.
        kind: &'static str,
        /// Type of the JSON token that was found instead.
        found: JsonType,
    },

    /// The input is not well-formed JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::Json(_) => ErrorKind::Json,
        }
    }
}

/// Error classes, for callers that handle a malformed shape differently
/// from an unrecognized name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Well-formed, but not a value or name of the kind.
    InvalidValue,
    /// A JSON token of the wrong type.
    InvalidType,
    /// Not JSON at all.
    Json,
}

/// Input that a kind's table does not contain.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Unrecognized {
    /// An integer with no canonical name.
    Raw(u32),
    /// A string that is not a canonical name.
    Name(String),
}

impl Display for Unrecognized {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(raw) => write!(f, "{raw:#x}"),
            Self::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// The JSON token types that cannot carry a canonical name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum JsonType {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any number.
    Number,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl Display for JsonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::InvalidValue {
            kind: "ALGORITHM",
            value: Unrecognized::Raw(99999999),
        };
        assert_eq!(err.to_string(), "0x5f5e0ff is not a valid ALGORITHM value");

        let err = Error::InvalidValue {
            kind: "CAPABILITY",
            value: Unrecognized::Name("TPM2_CAP_NOPE".into()),
        };
        assert_eq!(
            err.to_string(),
            r#""TPM2_CAP_NOPE" is not a valid CAPABILITY value"#
        );

        let err = Error::InvalidType {
            kind: "OBJECT ATTRIBUTE",
            found: JsonType::Bool,
        };
        assert_eq!(
            err.to_string(),
            "expected a JSON string for OBJECT ATTRIBUTE, found boolean"
        );
    }

    #[test]
    fn classification() {
        let err = Error::InvalidType {
            kind: "ALGORITHM",
            found: JsonType::Null,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidType);

        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Json);
    }
}
