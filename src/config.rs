// Startup configuration: which storefront to talk to, which product to look
// up and how requests are issued. Everything has a default so the tool runs
// with no environment at all; each value can be overridden by a variable.

use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://www.yeezysupply.com";
pub const DEFAULT_STOREFRONT: &str = "yeezysupply";
pub const DEFAULT_LIST_NAME: &str = "bloom";
pub const DEFAULT_PRODUCT_ID: &str = "FY4567";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser identification sent on every request. The storefront rejects
/// requests that do not look like they come from a desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.2; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/104.0.0.0 Safari/537.36";

/// How each HTTP request is issued: the same timeout and User-Agent for the
/// cookie bootstrap and for the API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for RequestSettings {
    fn default() -> Self {
        RequestSettings {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Storefront coordinates plus request settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub base_url: String,
    pub storefront: String,
    pub list_name: String,
    pub product_id: String,
    pub request: RequestSettings,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            base_url: DEFAULT_BASE_URL.into(),
            storefront: DEFAULT_STOREFRONT.into(),
            list_name: DEFAULT_LIST_NAME.into(),
            product_id: DEFAULT_PRODUCT_ID.into(),
            request: RequestSettings::default(),
        }
    }
}

impl StorefrontConfig {
    /// Build the configuration from `STOREFRONT_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StorefrontConfig::from_env`] but with an arbitrary source
    /// of variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let timeout = match lookup("STOREFRONT_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!(value = %raw, "ignoring unparsable STOREFRONT_TIMEOUT_SECS");
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        StorefrontConfig {
            base_url: var("STOREFRONT_BASE_URL", DEFAULT_BASE_URL),
            storefront: var("STOREFRONT_NAME", DEFAULT_STOREFRONT),
            list_name: var("STOREFRONT_LIST", DEFAULT_LIST_NAME),
            product_id: var("STOREFRONT_PRODUCT_ID", DEFAULT_PRODUCT_ID),
            request: RequestSettings {
                timeout,
                user_agent: DEFAULT_USER_AGENT.into(),
            },
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Public product list.
    pub fn catalog_url(&self) -> String {
        format!("{}/api/{}/products/{}", self.base(), self.storefront, self.list_name)
    }

    /// Product landing page, fetched only for its `Set-Cookie` header.
    pub fn landing_url(&self) -> String {
        format!("{}/product/{}", self.base(), self.product_id)
    }

    pub fn availability_url(&self) -> String {
        format!("{}/api/products/{}/availability", self.base(), self.product_id)
    }

    pub fn product_url(&self) -> String {
        format!("{}/api/products/{}", self.base(), self.product_id)
    }
}
