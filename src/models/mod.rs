//! Response schemas of the storefront API.
//!
//! Every struct decodes with `#[serde(default)]`: a field missing from the
//! response, or sent as `null`, takes its zero value, and fields the
//! storefront adds later are ignored.

pub mod availability;
pub mod catalog;
pub mod product;
pub mod timestamp;

use serde::{Deserialize, Deserializer, Serialize};

pub use availability::{AvailabilityRecord, VariationAvailability};
pub use catalog::{CatalogEntry, Image};
pub use product::{
    AttributeList, MetaData, PricingInformation, ProductDescription, ProductDetail, SizeFitBar, ViewListItem,
};
pub use timestamp::Timestamp;

/// Field deserializer that reads `null` as the zero value of `T`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Which response shape a body is decoded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Catalog,
    Availability,
    ProductDetail,
}

/// A decoded response, tagged with its schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Catalog(Vec<CatalogEntry>),
    Availability(AvailabilityRecord),
    ProductDetail(Box<ProductDetail>),
}

impl Document {
    pub fn schema(&self) -> Schema {
        match self {
            Document::Catalog(_) => Schema::Catalog,
            Document::Availability(_) => Schema::Availability,
            Document::ProductDetail(_) => Schema::ProductDetail,
        }
    }
}
