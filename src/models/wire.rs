//! Wire string mappings for API enums.
//!
//! The API exchanges enum values as fixed strings (`"rp-logout"`,
//! `"require_client_grant"`, ...). Each enum carries one table pairing its
//! variants with those strings; serialization, parsing and display are all
//! derived from that table so the two directions cannot drift apart.

use crate::error::{Auth0Error, Auth0Result};

/// An enum with a fixed bidirectional mapping to wire strings.
pub trait WireEnum: Sized + Copy + PartialEq + 'static {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Every variant paired with its wire string.
    const TABLE: &'static [(Self, &'static str)];

    /// The wire string of this variant.
    fn as_wire_str(&self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(variant, _)| variant == self)
            .map_or("", |(_, wire)| *wire)
    }

    /// Look up the variant for a wire string. Matching is exact.
    fn from_wire_str(value: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, wire)| *wire == value)
            .map(|(variant, _)| *variant)
    }

    /// Like [`WireEnum::from_wire_str`], reporting unknown values as errors.
    fn parse_wire_str(value: &str) -> Auth0Result<Self> {
        Self::from_wire_str(value).ok_or_else(|| Auth0Error::UnknownWireValue {
            type_name: Self::TYPE_NAME,
            value: value.to_string(),
        })
    }

    /// All variants in declaration order.
    fn variants() -> impl Iterator<Item = Self> {
        Self::TABLE.iter().map(|(variant, _)| *variant)
    }
}

/// Declare an enum together with its wire string table.
///
/// Generates the enum, a [`WireEnum`] impl, and `Display`, `FromStr`,
/// `Serialize` and `Deserialize` impls backed by the table.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::models::wire::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const TABLE: &'static [(Self, &'static str)] = &[$(($name::$variant, $wire)),+];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::models::wire::WireEnum::as_wire_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Auth0Error;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::models::wire::WireEnum>::parse_wire_str(value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::models::wire::WireEnum::as_wire_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::models::wire::WireEnum>::parse_wire_str(&value)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use wire_enum;
