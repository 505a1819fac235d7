use std::fmt;

use crate::error::CookieError;

/// The one cookie harvested from the landing page and replayed on the
/// authorized API calls. Lives for the current run only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    /// Extract `name=value` from a raw `Set-Cookie` header value.
    ///
    /// The header is split on the first `=`; of the remainder only the part
    /// before the first `;` is kept, so attributes such as `Path`, `Expires`
    /// or `HttpOnly` are dropped.
    pub fn parse(header: &str) -> Result<Self, CookieError> {
        let (name, rest) = header
            .split_once('=')
            .ok_or_else(|| CookieError::Malformed(header.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CookieError::Malformed(header.to_string()));
        }
        let value = rest.split(';').next().unwrap_or_default().trim();

        Ok(SessionCookie {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Value for an outgoing `Cookie` request header.
    pub fn header_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
