use serde::{Deserialize, Serialize};

use super::{null_as_default, Timestamp};

/// Full detail record of one product (`/api/products/<id>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_data: MetaData,
    #[serde(rename = "yeezyPDPCallout", deserialize_with = "null_as_default")]
    pub callouts: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub view_list: Vec<ViewListItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_information: PricingInformation,
    #[serde(deserialize_with = "null_as_default")]
    pub attribute_list: AttributeList,
    #[serde(deserialize_with = "null_as_default")]
    pub product_description: ProductDescription,
    #[serde(rename = "recommendationsEnabled", deserialize_with = "null_as_default")]
    pub recommendations_enabled: bool,
    /// Related products; the storefront gives them no stable shape.
    #[serde(deserialize_with = "null_as_default")]
    pub product_link_list: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaData {
    #[serde(deserialize_with = "null_as_default")]
    pub page_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub site_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: String,
    #[serde(deserialize_with = "null_as_default")]
    pub canonical: String,
}

/// One image of the product gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewListItem {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

/// Prices in minor currency units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingInformation {
    #[serde(deserialize_with = "null_as_default")]
    pub standard_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub standard_price_no_vat: i64,
    #[serde(rename = "currentPrice", deserialize_with = "null_as_default")]
    pub current_price: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeList {
    #[serde(rename = "isWaitingRoomProduct", deserialize_with = "null_as_default")]
    pub is_waiting_room_product: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub badge_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub badge_style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub return_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mtbr_flag: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub personalizable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub mandatory_personalization: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub customizable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub pricebook: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sale: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub outlet: bool,
    #[serde(rename = "isCnCRestricted", deserialize_with = "null_as_default")]
    pub is_cnc_restricted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub size_chart_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sport: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub size_fit_bar: SizeFitBar,
    pub preview_to: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub coming_soon_signup: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_order_quantity: i64,
    #[serde(rename = "productType", deserialize_with = "null_as_default")]
    pub product_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub search_color: String,
    #[serde(rename = "specialLaunch", deserialize_with = "null_as_default")]
    pub special_launch: bool,
    #[serde(rename = "specialLaunchType", deserialize_with = "null_as_default")]
    pub special_launch_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub search_color_raw: String,
}

/// "Runs small / true to size / runs large" indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeFitBar {
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(rename = "selectedMarkerIndex", deserialize_with = "null_as_default")]
    pub selected_marker_index: i64,
    #[serde(rename = "markerCount", deserialize_with = "null_as_default")]
    pub marker_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub usps: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description_assets: serde_json::Map<String, serde_json::Value>,
}
