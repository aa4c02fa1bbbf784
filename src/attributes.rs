// SPDX-License-Identifier: MIT OR Apache-2.0

//! Combinations of attribute flags.
//!
//! A `TPMA_ALGORITHM` or `TPMA_OBJECT` field on the wire is a mask of
//! several flags. The single-flag types have no name for such a mask, so
//! these sets are used to build one up and take one apart.

use crate::{AlgorithmAttribute, ObjectAttribute};
use bitflags::bitflags;

bitflags! {
    /// Set of [`AlgorithmAttribute`] flags, as held in a `TPMA_ALGORITHM`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[repr(transparent)]
    pub struct AlgorithmAttributes: u32 {
        /// Asymmetric algorithm with public and private portions.
        const ASYMMETRIC = AlgorithmAttribute::ASYMMETRIC.0;
        /// Symmetric block cipher.
        const SYMMETRIC = AlgorithmAttribute::SYMMETRIC.0;
        /// Hash algorithm.
        const HASH = AlgorithmAttribute::HASH.0;
        /// Algorithm that may be used as an object type.
        const OBJECT = AlgorithmAttribute::OBJECT.0;
        /// Signing algorithm.
        const SIGNING = AlgorithmAttribute::SIGNING.0;
        /// Encryption or decryption algorithm.
        const ENCRYPTING = AlgorithmAttribute::ENCRYPTING.0;
        /// Method such as a key derivation function.
        const METHOD = AlgorithmAttribute::METHOD.0;
    }
}

bitflags! {
    /// Set of [`ObjectAttribute`] flags, as held in a `TPMA_OBJECT`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[repr(transparent)]
    pub struct ObjectAttributes: u32 {
        /// The hierarchy of the object may not change.
        const FIXEDTPM = ObjectAttribute::FIXEDTPM.0;
        /// Saved contexts of this object may not be loaded after a reset.
        const STCLEAR = ObjectAttribute::STCLEAR.0;
        /// The parent of the object may not change.
        const FIXEDPARENT = ObjectAttribute::FIXEDPARENT.0;
        /// The TPM generated the sensitive data when the object was created.
        const SENSITIVEDATAORIGIN = ObjectAttribute::SENSITIVEDATAORIGIN.0;
        /// User role actions may use the authorization value.
        const USERWITHAUTH = ObjectAttribute::USERWITHAUTH.0;
        /// Admin role actions require a policy session.
        const ADMINWITHPOLICY = ObjectAttribute::ADMINWITHPOLICY.0;
        /// The object is not subject to dictionary attack protections.
        const NODA = ObjectAttribute::NODA.0;
        /// Duplication requires an encrypted inner wrapper.
        const ENCRYPTEDDUPLICATION = ObjectAttribute::ENCRYPTEDDUPLICATION.0;
        /// Key usage is restricted to structures the TPM has validated.
        const RESTRICTED = ObjectAttribute::RESTRICTED.0;
        /// The private portion may be used to decrypt.
        const DECRYPT = ObjectAttribute::DECRYPT.0;
        /// The private portion may be used to sign, or to encrypt for a
        /// symmetric key.
        const SIGN_ENCRYPT = ObjectAttribute::SIGN_ENCRYPT.0;
        /// The private portion may be used to sign an X.509 certificate.
        const X509SIGN = ObjectAttribute::X509SIGN.0;
    }
}

macro_rules! attribute_set {
    ($set:ident, $single:ident) => {
        impl $set {
            /// The named single flags contained in this set, in ascending bit
            /// order. Bits without a name are skipped.
            pub fn attributes(&self) -> impl Iterator<Item = $single> + '_ {
                self.iter_names().map(|(_, flag)| $single(flag.bits()))
            }

            /// Whether `attribute` is set. Always false for a value that is not a
            /// single named flag.
            #[must_use]
            pub fn has(&self, attribute: $single) -> bool {
                attribute.is_known() && self.contains(Self::from(attribute))
            }
        }

        impl From<$single> for $set {
            fn from(attribute: $single) -> Self {
                Self::from_bits_retain(attribute.0)
            }
        }

        impl FromIterator<$single> for $set {
            fn from_iter<I: IntoIterator<Item = $single>>(iter: I) -> Self {
                iter.into_iter().map(Self::from).collect()
            }
        }

        impl Extend<$single> for $set {
            fn extend<I: IntoIterator<Item = $single>>(&mut self, iter: I) {
                for attribute in iter {
                    self.insert(Self::from(attribute));
                }
            }
        }
    };
}

attribute_set!(AlgorithmAttributes, AlgorithmAttribute);
attribute_set!(ObjectAttributes, ObjectAttribute);
