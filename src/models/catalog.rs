use serde::{Deserialize, Serialize};

use super::{null_as_default, Timestamp};

/// One product of the public catalog listing. A listing is a
/// `Vec<CatalogEntry>` in the storefront's display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_model_id: String,
    #[serde(rename = "previewTo")]
    pub preview_to: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Image,
    #[serde(rename = "groupSortId", deserialize_with = "null_as_default")]
    pub group_sort_id: i64,
    #[serde(rename = "groupItemSortId", deserialize_with = "null_as_default")]
    pub group_item_sort_id: i64,
    #[serde(rename = "calloutMessages", deserialize_with = "null_as_default")]
    pub callout_messages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "preOrderable", deserialize_with = "null_as_default")]
    pub pre_orderable: bool,
    #[serde(rename = "isWaitingRoom", deserialize_with = "null_as_default")]
    pub is_waiting_room: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}
