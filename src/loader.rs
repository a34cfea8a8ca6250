use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{instrument, warn};
use url::Url;

use crate::error::FetchError;
use crate::fetch::Fetch;

/// Loads JSON resources relative to the data origin.
#[derive(Debug)]
pub struct Loader<F> {
    base: Url,
    fetcher: F,
}

impl<F: Fetch> Loader<F> {
    pub fn new(base: Url, fetcher: F) -> Self {
        Self { base, fetcher }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Fetch `path` and decode it as `T`.
    /// Any failure (bad url, transport, non-success status, malformed JSON) yields
    /// `fallback` and a warning; the caller never sees an error.
    #[instrument(level = "info", skip(self, fallback))]
    pub fn load_resource<T: DeserializeOwned>(&self, path: &str, fallback: T) -> T {
        match self.try_load::<T>(path) {
            Ok(value) => value,
            Err(e) => {
                warn!(path, error = %e, "Failed to load resource; using fallback");
                fallback
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let url = self
            .base
            .join(path)
            .map_err(|source| FetchError::Url { path: path.to_string(), source })?;
        let response = self.fetcher.fetch(&url)?;
        Ok(serde_json::from_str::<T>(&response.body)?)
    }
}

/// Load on a blocking worker thread so several loads can be in flight at once.
/// A panicked or cancelled worker resolves to the fallback as well.
pub async fn load_blocking<F, T>(loader: &Arc<Loader<F>>, path: &'static str, fallback: T) -> T
where
    F: Fetch + 'static,
    T: DeserializeOwned + Clone + Send + 'static,
{
    let loader = Arc::clone(loader);
    let on_join_error = fallback.clone();
    match tokio::task::spawn_blocking(move || loader.load_resource(path, fallback)).await {
        Ok(value) => value,
        Err(e) => {
            warn!(path, error = %e, "Load task join error; using fallback");
            on_join_error
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
