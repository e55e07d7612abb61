//! Cross-type checks for `s3crt-model`.
//!
//! The generic checkers in this crate are run over every generated structure
//! and open enum, so a regression in `s3_structure!`, `open_enum!` or the
//! code generator shows up against the real S3 catalogue.
//!
//! ```text
//! cargo test -p s3crt-integration
//! ```

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Once;

use s3crt_model::{OpenEnum, Structure, StructureBuilder, UNKNOWN_DISPLAY};
use serde::Serialize;
use serde::de::DeserializeOwned;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

fn assert_send_sync<T: Send + Sync>() {}

/// Check the structure contract on the default value of `T`.
///
/// A fresh builder, a builder seeded from the default and repeated builds
/// all have to produce field-equal values.
pub fn check_structure<T: Structure>() {
    let shape = T::SHAPE;
    let fresh = T::default();

    assert_eq!(T::builder().build(), fresh, "{shape}: fresh builder differs from default");
    assert_eq!(fresh.to_builder().build(), fresh, "{shape}: to_builder round trip");
    assert_eq!(fresh.with_changes(|_| {}), fresh, "{shape}: no-op edit changed the value");

    let builder = fresh.to_builder();
    assert_eq!(builder.build(), builder.build(), "{shape}: repeated builds differ");
    assert_eq!(fresh.clone(), fresh, "{shape}: clone differs");
    assert!(format!("{fresh:?}").starts_with(shape), "{shape}: debug output");

    assert_send_sync::<T>();
    assert_send_sync::<T::Builder>();
}

/// Check the open enum contract for `E`, which declares `declared` known variants.
pub fn check_open_enum<E>(declared: usize)
where
    E: OpenEnum
        + Display
        + FromStr<Err = Infallible>
        + Serialize
        + DeserializeOwned
        + for<'a> From<&'a str>,
{
    init_tracing();
    let shape = E::SHAPE;
    let known = E::known_values();

    assert_eq!(known.len(), declared, "{shape}: known variant count");
    assert!(!known.contains(&E::UNKNOWN), "{shape}: sentinel listed as known");
    let distinct: HashSet<E> = known.iter().copied().collect();
    assert_eq!(distinct.len(), known.len(), "{shape}: duplicate known variants");

    for &variant in known {
        let raw = variant
            .value()
            .unwrap_or_else(|| panic!("{shape}: {variant:?} has no wire value"));
        assert!(!variant.is_unknown(), "{shape}: {raw} reported as unknown");
        assert_eq!(E::from_raw(raw), variant, "{shape}: from_raw({raw})");
        assert_eq!(E::from_value(Some(raw)), Some(variant), "{shape}: from_value({raw})");
        assert_eq!(E::from(raw), variant, "{shape}: From<&str>({raw})");
        assert_eq!(raw.parse::<E>(), Ok(variant), "{shape}: parse({raw})");
        assert_eq!(variant.to_string(), raw, "{shape}: display");
        assert_eq!(variant.try_value().ok(), Some(raw), "{shape}: try_value");

        let json = serde_json::to_value(variant)
            .unwrap_or_else(|e| panic!("{shape}: serialize {raw}: {e}"));
        assert_eq!(json, serde_json::Value::String(raw.to_owned()));
        let back: E = serde_json::from_value(json)
            .unwrap_or_else(|e| panic!("{shape}: deserialize {raw}: {e}"));
        assert_eq!(back, variant, "{shape}: serde round trip");

        let lowered = raw.to_lowercase();
        if lowered != raw && known.iter().all(|v| v.value() != Some(lowered.as_str())) {
            assert!(E::from_raw(&lowered).is_unknown(), "{shape}: lookup is case-insensitive");
        }
    }

    assert_eq!(E::from_value(None), None, "{shape}: absence must propagate");
    assert!(E::from_raw("").is_unknown(), "{shape}: empty string");
    assert!(
        E::from_raw("some-unrecognized-value").is_unknown(),
        "{shape}: unrecognized value"
    );
    assert_eq!(E::UNKNOWN.value(), None, "{shape}: sentinel has a wire value");
    assert!(E::UNKNOWN.try_value().is_err(), "{shape}: sentinel try_value");
    assert_eq!(E::UNKNOWN.to_string(), UNKNOWN_DISPLAY, "{shape}: sentinel display");
    assert!(
        serde_json::to_value(E::UNKNOWN).is_err(),
        "{shape}: sentinel must not serialize"
    );
    let decoded: E = serde_json::from_str("\"not-a-known-value\"")
        .unwrap_or_else(|e| panic!("{shape}: unknown wire value rejected: {e}"));
    assert!(decoded.is_unknown(), "{shape}: unknown wire value");

    tracing::debug!(shape, declared, "open enum checked");
}

/// Run [`check_structure`] for each listed type and return how many ran.
#[cfg(test)]
macro_rules! check_structures {
    ($($ty:ident),* $(,)?) => {{
        let mut checked = 0_usize;
        $(
            assert_eq!(<$ty as ::s3crt_model::Structure>::SHAPE, stringify!($ty));
            $crate::check_structure::<$ty>();
            checked += 1;
        )*
        checked
    }};
}

/// Run [`check_open_enum`] for each `Type => declared_count` pair and return how many ran.
#[cfg(test)]
macro_rules! check_open_enums {
    ($($ty:ident => $count:expr),* $(,)?) => {{
        let mut checked = 0_usize;
        $(
            assert_eq!(<$ty as ::s3crt_model::OpenEnum>::SHAPE, stringify!($ty));
            $crate::check_open_enum::<$ty>($count);
            checked += 1;
        )*
        checked
    }};
}

mod test_builders;
mod test_concurrency;
mod test_enums;
mod test_inputs;
mod test_operations;
mod test_outputs;
mod test_scenarios;
mod test_types;
