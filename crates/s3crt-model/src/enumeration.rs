//! Open enumerations: a fixed set of known wire strings plus an `Unknown`
//! sentinel for values introduced by the service after this client was built.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{ModelError, ModelResult};

/// Wire value printed by `Display` for the sentinel variant.
pub const UNKNOWN_DISPLAY: &str = "UNKNOWN_TO_SDK_VERSION";

/// A string-valued enumeration that tolerates values it does not know.
///
/// Decoding is total: any raw string maps to a variant, with unrecognized
/// strings collapsing to [`OpenEnum::UNKNOWN`]. Matching is exact and
/// case-sensitive.
pub trait OpenEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Name of the enumeration shape.
    const SHAPE: &'static str;

    /// The sentinel variant.
    const UNKNOWN: Self;

    /// Every variant except the sentinel.
    fn known_values() -> &'static [Self];

    /// The wire value of a known variant, `None` for the sentinel.
    fn value(self) -> Option<&'static str>;

    /// Map a raw wire string to a variant.
    fn from_raw(raw: &str) -> Self {
        if let Some(known) = Self::known_values()
            .iter()
            .copied()
            .find(|variant| variant.value() == Some(raw))
        {
            return known;
        }
        tracing::debug!(shape = Self::SHAPE, value = raw, "unrecognized enum value");
        Self::UNKNOWN
    }

    /// Map an optional raw wire string, propagating absence.
    fn from_value(raw: Option<&str>) -> Option<Self> {
        raw.map(Self::from_raw)
    }

    /// Whether this is the sentinel variant.
    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// The wire value, or an error for the sentinel.
    fn try_value(self) -> ModelResult<&'static str> {
        self.value()
            .ok_or(ModelError::UnknownVariant { shape: Self::SHAPE })
    }
}

/// Serialize an open enumeration as its wire string.
#[doc(hidden)]
pub fn serialize_open_enum<E, S>(value: E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: OpenEnum,
    S: Serializer,
{
    let raw = value.try_value().map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(raw)
}

/// Deserialize an open enumeration from a wire string.
#[doc(hidden)]
pub fn deserialize_open_enum<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: OpenEnum,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(E::from_raw(&raw))
}

/// Declare an open enumeration.
///
/// Each `Variant => "wire"` pair becomes a known variant; an `Unknown`
/// variant is appended and receives every raw value that matches none of
/// them.
///
/// ```
/// use s3crt_model::open_enum;
///
/// open_enum! {
///     /// Retrieval tier.
///     pub enum Tier {
///         Standard => "Standard",
///         Bulk => "Bulk",
///     }
/// }
///
/// assert_eq!(Tier::from_raw("Bulk"), Tier::Bulk);
/// assert_eq!(Tier::from_raw("bulk"), Tier::Unknown);
/// assert_eq!(Tier::from_value(None), None);
/// assert_eq!(Tier::Standard.value(), Some("Standard"));
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value this client was not built with.
            Unknown,
        }

        impl $name {
            /// Map a raw wire string to a variant, falling back to `Unknown`.
            #[must_use]
            pub fn from_raw(raw: &str) -> Self {
                <Self as $crate::OpenEnum>::from_raw(raw)
            }

            /// Map an optional raw wire string, propagating absence.
            #[must_use]
            pub fn from_value(raw: Option<&str>) -> Option<Self> {
                <Self as $crate::OpenEnum>::from_value(raw)
            }

            /// Every variant except `Unknown`.
            #[must_use]
            pub fn known_values() -> &'static [Self] {
                <Self as $crate::OpenEnum>::known_values()
            }

            /// The wire value, `None` for `Unknown`.
            #[must_use]
            pub fn value(self) -> Option<&'static str> {
                <Self as $crate::OpenEnum>::value(self)
            }

            /// Whether this is the `Unknown` sentinel.
            #[must_use]
            pub fn is_unknown(self) -> bool {
                matches!(self, Self::Unknown)
            }
        }

        impl $crate::OpenEnum for $name {
            const SHAPE: &'static str = stringify!($name);
            const UNKNOWN: Self = Self::Unknown;

            fn known_values() -> &'static [Self] {
                &[$(Self::$variant),*]
            }

            fn value(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($value),)*
                    Self::Unknown => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.value().unwrap_or($crate::UNKNOWN_DISPLAY))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from_raw(raw)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from_raw(raw))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serialize_open_enum(*self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::__private::deserialize_open_enum(deserializer)
            }
        }

        impl $crate::Member for $name {
            type Slot = ::std::option::Option<$name>;
            type Ref<'a> = ::std::option::Option<$name>;

            fn stage(value: Self) -> Self::Slot {
                Some(value)
            }

            fn stage_optional(value: ::std::option::Option<Self>) -> Self::Slot {
                value
            }

            fn view(slot: &Self::Slot) -> Self::Ref<'_> {
                *slot
            }
        }
    };
}
