use tracing::{debug, info_span};
use url::Url;

use crate::error::FetchError;

/// A successful (2xx) response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Anything that can retrieve a resource by absolute URL.
///
/// Implementations only return `Ok` for success statuses; everything else is a
/// [`FetchError`]. Blocking by contract: callers on an async runtime wrap calls in
/// `spawn_blocking`.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError>;
}

impl<T: Fetch + ?Sized> Fetch for std::sync::Arc<T> {
    fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError> {
        (**self).fetch(url)
    }
}

/// Plain network fetcher over `ureq`, always revalidating with the origin.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError> {
        let result = {
            let _span = info_span!("http_fetch", url = %url).entered();
            ureq::get(url.as_str()).header("Cache-Control", "no-cache").call()
        };
        let response = match result {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(code)) => return Err(FetchError::Status(code)),
            Err(e) => return Err(FetchError::Transport(e.to_string())),
        };

        // Some agents are configured to hand back error statuses as Ok.
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string().map_err(|e| FetchError::Body(e.to_string()))?;
        debug!(status, bytes = body.len(), "Fetched resource");
        Ok(FetchedResponse { status, content_type, body })
    }
}
