// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tooling for C-style enums with canonical names.
//!
//! The TPM specification defines its enumerations as integer constants, and
//! a peer is free to send a value this crate has never heard of. Storing such
//! a value in a Rust `enum` is not possible, so each kind is modeled as a
//! newtype of `u32` featuring a set of associated constants instead.
//!
//! On top of that, every constant has a canonical name: the specification
//! prefix of its kind followed by the name of the Rust constant. The macro in
//! this module generates the type, its constants, its name table and the
//! formatting and serialization impls that go through [`crate::codec`].

/// Define a TPM constant kind modeled as a `u32` newtype.
///
/// ```ignore
/// tpm_enum! {
///     /// Capability selectors.
///     pub enum Capability => "TPM2_CAP_", "CAPABILITY" {
///         ALGS    = 0x0000_0000,
///         HANDLES = 0x0000_0001,
///     }
/// }
/// ```
///
/// The first literal is the prefix of every canonical name, the second one
/// is the noun used for values without a name (`UNKNOWN CAPABILITY VALUE`).
/// Two constants sharing a value make the generated name lookup unreachable
/// and are flagged by the `unreachable_patterns` lint.
macro_rules! tpm_enum {
    (
        $(#[$type_attrs:meta])*
        $visibility:vis enum $type:ident => $prefix:literal, $noun:literal {
            $(
                $(#[$variant_attrs:meta])*
                $variant:ident = $value:expr,
            )*
        }
    ) => {
        $(#[$type_attrs])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $visibility struct $type(pub u32);

        #[allow(unused)]
        impl $type {
            $(
                $(#[$variant_attrs])*
                pub const $variant: $type = $type($value);
            )*

            /// Canonical specification name of this value, if it has one.
            #[must_use]
            pub fn name(self) -> Option<&'static str> {
                $crate::Constant::name_of(self)
            }

            /// Whether this value has a canonical name.
            #[must_use]
            pub fn is_known(self) -> bool {
                self.name().is_some()
            }

            /// Encode this value as a JSON string holding its canonical name.
            pub fn to_json(self) -> $crate::Result<Vec<u8>> {
                $crate::codec::to_json(self)
            }

            /// Decode a value from a JSON string holding its canonical name.
            pub fn from_json(bytes: &[u8]) -> $crate::Result<Self> {
                $crate::codec::from_json(bytes)
            }
        }

        impl $crate::Constant for $type {
            const KIND: &'static str = $noun;
            const UNKNOWN: &'static str = concat!("UNKNOWN ", $noun, " VALUE");
            const TABLE: &'static [(Self, &'static str)] = &[
                $( ($type::$variant, concat!($prefix, stringify!($variant))), )*
            ];

            fn from_raw(raw: u32) -> Self {
                $type(raw)
            }

            fn raw(self) -> u32 {
                self.0
            }

            fn name_of(self) -> Option<&'static str> {
                match self {
                    $( $type::$variant => Some(concat!($prefix, stringify!($variant))), )*
                    _ => None,
                }
            }
        }

        impl From<u32> for $type {
            fn from(raw: u32) -> Self {
                $type(raw)
            }
        }

        impl From<$type> for u32 {
            fn from(value: $type) -> Self {
                value.0
            }
        }

        impl core::fmt::Debug for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}({:#x})", stringify!($type), self.0),
                }
            }
        }

        impl core::fmt::Display for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::codec::name_or_unknown(*self))
            }
        }

        impl core::str::FromStr for $type {
            type Err = $crate::Error;

            fn from_str(name: &str) -> $crate::Result<Self> {
                $crate::codec::parse_name(name)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                $crate::codec::serialize(*self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                $crate::codec::deserialize(deserializer)
            }
        }
    }
}
