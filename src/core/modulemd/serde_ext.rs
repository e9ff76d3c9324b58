//! core::modulemd::serde_ext
//!
//! Field-level serde helpers shared by the schema types.
//!
//! YAML lets a key be present with no value (`license:` on its own line).
//! Such keys decode to the field's zero value instead of failing, so every
//! non-marker field is routed through [`or_default`]. Sequence elements and
//! map values get the same treatment through [`seq_values`],
//! [`map_values`], [`map_seq_values`] and [`nested_map_values`].

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::schema::Eol;

/// Skip predicate for scalars and records: true when the value equals its default.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Decode an explicit null as the type's default.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a sequence whose elements may individually be null.
pub(crate) fn seq_values<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Decode a map whose values may individually be null.
pub(crate) fn map_values<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<BTreeMap<String, Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

/// Map of sequences, as in `buildrequires: {platform: [f38, ~]}`.
pub(crate) fn map_seq_values<'de, D, T>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<BTreeMap<String, Option<Vec<Option<T>>>>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, values)| {
            let values = values
                .unwrap_or_default()
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect();
            (key, values)
        })
        .collect())
}

/// Two-level variant of [`map_values`], used by `artifacts.rpm-map`.
pub(crate) fn nested_map_values<'de, D, T>(
    deserializer: D,
) -> Result<BTreeMap<String, BTreeMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<BTreeMap<String, Option<BTreeMap<String, Option<T>>>>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(outer, inner)| {
            let inner = inner
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, value.unwrap_or_default()))
                .collect();
            (outer, inner)
        })
        .collect())
}

/// The `eol` key is a presence flag: whatever it holds (a date, a mapping,
/// nothing at all) is discarded and the marker is set.
pub(crate) fn eol_marker<'de, D>(deserializer: D) -> Result<Option<Eol>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(Some(Eol))
}
