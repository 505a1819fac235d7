// Selection dispatcher: maps the two-level menu answer to an endpoint and a
// schema, then runs the request sequence for it.
//
//   top menu  "1" -> catalog (public, no cookie)
//             "2" -> product menu
//   product   "1" -> availability    (cookie bootstrap first)
//             "2" -> product detail  (cookie bootstrap first)
//
// Anything else at either level is an invalid selection and no request is
// issued.

use std::fmt;

use tracing::debug;

use crate::api::{bootstrap_cookie, fetch_authorized, Transport};
use crate::config::StorefrontConfig;
use crate::decode::{decode_document, Report};
use crate::error::Result;
use crate::models::Schema;

/// Menu level an invalid answer was given at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLevel {
    Top,
    Product,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selection {input:?} in the {level} menu")]
pub struct InvalidSelection {
    pub level: MenuLevel,
    pub input: String,
}

impl fmt::Display for MenuLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuLevel::Top => "main",
            MenuLevel::Product => "product",
        })
    }
}

/// Strip the line terminator left by a line read.
fn clean(input: &str) -> &str {
    input.trim_end_matches(&['\r', '\n'][..])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopChoice {
    Catalog,
    Product,
}

impl TopChoice {
    pub fn parse(input: &str) -> std::result::Result<Self, InvalidSelection> {
        match clean(input) {
            "1" => Ok(TopChoice::Catalog),
            "2" => Ok(TopChoice::Product),
            other => Err(InvalidSelection {
                level: MenuLevel::Top,
                input: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductChoice {
    Availability,
    Detail,
}

impl ProductChoice {
    pub fn parse(input: &str) -> std::result::Result<Self, InvalidSelection> {
        match clean(input) {
            "1" => Ok(ProductChoice::Availability),
            "2" => Ok(ProductChoice::Detail),
            other => Err(InvalidSelection {
                level: MenuLevel::Product,
                input: other.to_string(),
            }),
        }
    }
}

/// A complete menu answer: one of the three things that can be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Catalog,
    Availability,
    ProductDetail,
}

impl From<ProductChoice> for Selection {
    fn from(choice: ProductChoice) -> Self {
        match choice {
            ProductChoice::Availability => Selection::Availability,
            ProductChoice::Detail => Selection::ProductDetail,
        }
    }
}

/// Where to send the request, what to decode the answer into and whether
/// the session cookie has to be bootstrapped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub schema: Schema,
    pub url: String,
    pub needs_cookie: bool,
}

impl Selection {
    pub fn endpoint(self, config: &StorefrontConfig) -> Endpoint {
        match self {
            Selection::Catalog => Endpoint {
                schema: Schema::Catalog,
                url: config.catalog_url(),
                needs_cookie: false,
            },
            Selection::Availability => Endpoint {
                schema: Schema::Availability,
                url: config.availability_url(),
                needs_cookie: true,
            },
            Selection::ProductDetail => Endpoint {
                schema: Schema::ProductDetail,
                url: config.product_url(),
                needs_cookie: true,
            },
        }
    }
}

/// Run the request sequence for `selection` and decode the answer.
///
/// For the authorized endpoints the landing page is fetched first; if no
/// usable cookie comes back the API request is not attempted.
pub fn run<T: Transport + ?Sized>(transport: &T, config: &StorefrontConfig, selection: Selection) -> Result<Report> {
    let endpoint = selection.endpoint(config);
    debug!(?selection, url = %endpoint.url, "fetching");

    let cookie = if endpoint.needs_cookie {
        Some(bootstrap_cookie(transport, &config.landing_url())?)
    } else {
        None
    };
    let body = fetch_authorized(transport, &endpoint.url, cookie.as_ref())?;

    Ok(decode_document(endpoint.schema, &body))
}
