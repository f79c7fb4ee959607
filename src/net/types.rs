//! Wire schema for the static province catalog document.
//!
//! DESIGN
//! ======
//! The catalog is authored by hand and never validated. The document is kept
//! as raw JSON per province and a record is only decoded when that province is
//! looked up, so a broken entry cannot take its siblings down with it. Within
//! a record every field falls back to its empty value when absent or `null`.
//! Optional contact fields stay `Option` so sub-views can skip them instead of
//! rendering blanks.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque province identifier used as the catalog lookup key.
pub type ProvinceKey = String;

/// Full catalog document: province key to the undecoded record.
///
/// Decode a single entry with [`ProvinceRecord::from_entry`].
pub type ProvinceCatalog = BTreeMap<ProvinceKey, serde_json::Value>;

/// Everything the panel shows for one province.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceRecord {
    /// Free-text summary on the About tab. Empty renders the
    /// "not available" placeholder.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Hero image shown on the About tab; empty when the province has none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub province_image: String,
    /// Gallery image URLs, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// School directory for the Schools tab, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub schools: Vec<SchoolInfo>,
    /// Volunteers listed on the About tab.
    #[serde(default, deserialize_with = "null_as_default")]
    pub volunteers: Vec<VolunteerInfo>,
    /// Headline counts; zero when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: ProvinceStats,
}

impl ProvinceRecord {
    /// Decode one catalog entry.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the entry is not a record (e.g. a string,
    /// or a school without a name).
    pub fn from_entry(entry: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(entry)
    }
}

/// A school directory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
    /// Display name; the only required field.
    pub name: String,
    /// Street address, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Phone number as authored, not normalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A volunteer listed on the About tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerInfo {
    /// Display name.
    pub name: String,
    /// Free-form contact line (email, phone, or handle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Headline counts for a province.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceStats {
    /// Number of districts in the province.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub districts: u64,
    /// Enrolled students across the province.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub students: u64,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any non-negative integer-compatible JSON number (`12` or `12.0`).
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            // `u64::MAX as f64` rounds up to 2^64, which is itself out of range.
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float < u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
