// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed constants from the TPM 2.0 specification.
//!
//! The TPM command/response protocol is full of C-style enumerations:
//! algorithm identifiers (`TPM_ALG_ID`), algorithm attributes
//! (`TPMA_ALGORITHM`), capability selectors (`TPM_CAP`) and object
//! attributes (`TPMA_OBJECT`). This crate models each of them as an integer
//! newtype with a set of associated constants, so that a value received from
//! the outside world is always representable, even if it is not one the
//! specification names.
//!
//! Every named value has a canonical name, the exact identifier used by the
//! specification (`TPM2_ALG_RSA`, `TPMA_OBJECT_DECRYPT`, ...). That name is
//! used both for display and as the JSON wire form:
//!
//! ```
//! use tpm2_constants::{Algorithm, ErrorKind};
//!
//! assert_eq!(Algorithm::RSA.to_string(), "TPM2_ALG_RSA");
//! assert_eq!(Algorithm(99999999).to_string(), "UNKNOWN ALGORITHM VALUE");
//!
//! assert_eq!(Algorithm::RSA.to_json().unwrap(), br#""TPM2_ALG_RSA""#);
//! assert_eq!(Algorithm::from_json(br#""TPM2_ALG_ECC""#).unwrap(), Algorithm::ECC);
//!
//! let err = Algorithm::from_json(b"false").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidType);
//! ```
//!
//! The same conversions are available through `serde`, so the types can be
//! used directly as fields of larger message structures.
//!
//! # Bitmask kinds
//!
//! [`AlgorithmAttribute`] and [`ObjectAttribute`] are flags in the
//! specification. The codec only knows the single, literal flag values; a
//! combined mask has no canonical name. Use [`AlgorithmAttributes`] and
//! [`ObjectAttributes`] to work with combinations.

#![warn(missing_docs, unused)]
#![deny(clippy::all)]
#![deny(clippy::must_use_candidate)]

#[macro_use]
mod enums;

mod attributes;
pub mod codec;
mod error;
mod tables;

pub use self::attributes::{AlgorithmAttributes, ObjectAttributes};
pub use self::codec::Constant;
pub use self::error::{Error, ErrorKind, JsonType, Result, Unrecognized};
pub use self::tables::{Algorithm, AlgorithmAttribute, Capability, ObjectAttribute};
