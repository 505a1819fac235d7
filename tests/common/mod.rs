//! Shared test fixtures: a scripted transport that records every request.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use storefront_cli::api::{RawResponse, Transport};
use storefront_cli::config::StorefrontConfig;
use storefront_cli::cookie::SessionCookie;
use storefront_cli::error::{FetchError, Result};

/// One request as the transport saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub url: String,
    pub cookie: Option<String>,
}

/// Replies with queued responses in order and records what was asked.
/// Running out of responses is reported as a transport failure.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse>>>,
    pub requests: RefCell<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, set_cookie: Option<&str>, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse {
            status,
            set_cookie: set_cookie.map(str::to_string),
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn fail(self, url: &str) -> Self {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
        self.replies.borrow_mut().push_back(Err(FetchError::transport(url, err)));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str, cookie: Option<&SessionCookie>) -> Result<RawResponse> {
        self.requests.borrow_mut().push(Recorded {
            url: url.to_string(),
            cookie: cookie.map(SessionCookie::header_value),
        });
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(FetchError::transport(
                url,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "no scripted reply"),
            ))
        })
    }
}

pub fn config() -> StorefrontConfig {
    StorefrontConfig {
        base_url: "http://shop.test".into(),
        ..StorefrontConfig::default()
    }
}

pub const CATALOG_JSON: &str = r#"[
  {
    "price": 220,
    "product_id": "FY4567",
    "product_name": "YEEZY FOAM RUNNER",
    "product_model_id": "MKF84",
    "previewTo": "2022-08-18T14:00:00Z",
    "image": {
      "alt": "YEEZY FOAM RUNNER",
      "link": "https://images.example.com/FY4567.png",
      "title": "YEEZY FOAM RUNNER"
    },
    "groupSortId": 1,
    "groupItemSortId": 2,
    "calloutMessages": ["LIMIT 1 PER CUSTOMER", "FINAL SALE"],
    "color": "SAND",
    "preOrderable": false,
    "isWaitingRoom": true
  },
  {
    "price": 90,
    "product_id": "GW1934",
    "product_name": "YEEZY SLIDE",
    "product_model_id": "MBX37",
    "previewTo": "2022-08-19T09:30:00+02:00",
    "image": {
      "alt": "YEEZY SLIDE",
      "link": "https://images.example.com/GW1934.png",
      "title": "YEEZY SLIDE"
    },
    "groupSortId": 1,
    "groupItemSortId": 1,
    "calloutMessages": [],
    "color": "ONYX",
    "preOrderable": true,
    "isWaitingRoom": false
  }
]"#;

pub const AVAILABILITY_JSON: &str = r#"{
  "id": "FY4567",
  "availability_status": "IN_STOCK",
  "variation_list": [
    {"sku": "FY4567_530", "size": "4", "availability": 15, "availability_status": "IN_STOCK"},
    {"sku": "FY4567_540", "size": "5", "availability": 0, "availability_status": "NOT_AVAILABLE"}
  ]
}"#;

pub const PRODUCT_JSON: &str = r#"{
  "id": "FY4567",
  "name": "YEEZY FOAM RUNNER",
  "model_number": "MKF84",
  "product_type": "inline",
  "meta_data": {
    "page_title": "YEEZY FOAM RUNNER",
    "site_name": "YEEZY SUPPLY",
    "description": "Foam runner in sand",
    "keywords": "yeezy, foam, runner",
    "canonical": "https://www.yeezysupply.com/product/FY4567"
  },
  "yeezyPDPCallout": ["LIMIT 1 PER CUSTOMER"],
  "view_list": [
    {"type": "standard", "image_url": "https://images.example.com/FY4567_1.png", "source": "PRODUCT_IMAGE"},
    {"type": "detail", "image_url": "https://images.example.com/FY4567_2.png", "source": "PRODUCT_IMAGE"}
  ],
  "pricing_information": {
    "standard_price": 8000,
    "standard_price_no_vat": 6667,
    "currentPrice": 8000
  },
  "attribute_list": {
    "isWaitingRoomProduct": true,
    "badge_text": "NEW",
    "badge_style": "DEFAULT",
    "brand": "YEEZY",
    "collection": ["YEEZY FOAM RUNNER"],
    "category": "Shoes",
    "color": "SAND",
    "return_type": "not_returnable",
    "mtbr_flag": false,
    "gender": "U",
    "personalizable": false,
    "mandatory_personalization": false,
    "customizable": false,
    "pricebook": "yeezy-EUR",
    "sale": false,
    "outlet": false,
    "isCnCRestricted": true,
    "size_chart_link": "/size-chart/foam",
    "sport": ["Lifestyle"],
    "size_fit_bar": {"value": "true_to_size", "selectedMarkerIndex": 2, "markerCount": 5},
    "preview_to": "2022-08-18T14:00:00Z",
    "coming_soon_signup": true,
    "max_order_quantity": 1,
    "productType": ["Sneakers"],
    "search_color": "Beige",
    "specialLaunch": true,
    "specialLaunchType": "YEEZY",
    "search_color_raw": "SAND"
  },
  "product_description": {
    "title": "YEEZY FOAM RUNNER",
    "usps": ["Injected foam", "Made with algae"],
    "description_assets": {"image_url": "https://images.example.com/FY4567_d.png", "video": null}
  },
  "recommendationsEnabled": false,
  "product_link_list": [{"type": "color", "productId": "GW3355"}]
}"#;
