// Error types for the request side of the pipeline. Decode problems are not
// errors here: a body that does not match its schema still produces output,
// see `decode::DecodeDiagnostic`.

/// Problems with the `Set-Cookie` header returned by the landing page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    #[error("landing page response carried no Set-Cookie header")]
    Missing,

    #[error("malformed Set-Cookie header {0:?}: expected name=value")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("no response from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("cookie bootstrap failed: {0}")]
    Cookie(#[from] CookieError),
}

impl FetchError {
    pub fn transport<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        FetchError::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
