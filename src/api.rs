// API client module: a small blocking HTTP client for the storefront. It
// knows two things: how to harvest the session cookie from a landing page
// and how to fetch an API endpoint with that cookie attached. Decoding the
// body is left to `decode`.

use reqwest::blocking::Client;
use reqwest::header::{COOKIE, SET_COOKIE};
use tracing::{debug, warn};

use crate::config::RequestSettings;
use crate::cookie::SessionCookie;
use crate::error::{CookieError, FetchError, Result};

/// Everything the pipeline needs from one HTTP exchange, fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// First `Set-Cookie` header of the response, if any.
    pub set_cookie: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single GET, optionally carrying one cookie.
///
/// `ApiClient` is the real implementation; tests substitute a recording fake.
pub trait Transport {
    fn get(&self, url: &str, cookie: Option<&SessionCookie>) -> Result<RawResponse>;
}

/// reqwest blocking client preconfigured with the request timeout and the
/// browser User-Agent.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(settings: &RequestSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(ApiClient { client })
    }
}

impl Transport for ApiClient {
    fn get(&self, url: &str, cookie: Option<&SessionCookie>) -> Result<RawResponse> {
        let mut req = self.client.get(url);
        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie.header_value());
        }

        debug!(%url, with_cookie = cookie.is_some(), "sending request");
        // The response owns the connection; it is released when `res` goes
        // out of scope, whether or not the body read below succeeds.
        let res = req.send().map_err(|e| FetchError::transport(url, e))?;
        let status = res.status().as_u16();
        let set_cookie = res
            .headers()
            .get(SET_COOKIE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        let body = res.bytes().map_err(|e| FetchError::transport(url, e))?;
        debug!(%url, status, bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            set_cookie,
            body: body.to_vec(),
        })
    }
}

/// GET the landing page and turn its `Set-Cookie` header into a
/// [`SessionCookie`]. The page body is thrown away.
pub fn bootstrap_cookie<T: Transport + ?Sized>(transport: &T, landing_url: &str) -> Result<SessionCookie> {
    let res = transport.get(landing_url, None)?;
    let header = res.set_cookie.ok_or(CookieError::Missing)?;
    let cookie = SessionCookie::parse(&header)?;
    debug!(name = %cookie.name, "session cookie obtained");
    Ok(cookie)
}

/// GET an API endpoint, attaching the session cookie when one is given.
///
/// A non-2xx status is not an error: the body is handed on for decoding
/// regardless, since the storefront sometimes explains itself in it.
pub fn fetch_authorized<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    cookie: Option<&SessionCookie>,
) -> Result<Vec<u8>> {
    let res = transport.get(url, cookie)?;
    if !res.is_success() {
        warn!(%url, status = res.status, "storefront answered with a non-success status");
    }
    Ok(res.body)
}
