use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Stock summary of one product. Status strings are passed through as the
/// storefront sends them (`IN_STOCK`, `NOT_AVAILABLE`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub availability_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variation_list: Vec<VariationAvailability>,
}

/// Availability of a single SKU (one size).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationAvailability {
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub availability: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub availability_status: String,
}
