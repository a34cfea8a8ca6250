//! Error types for the creator hub.

use thiserror::Error;

/// Errors raised while fetching a resource from the data origin.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The resource path could not be joined onto the origin.
    #[error("invalid resource url {path}: {source}")]
    Url {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure (DNS, TLS, connection reset...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The origin answered with a non-success status.
    #[error("non-success status {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Neither the cache nor the network could serve the request.
    #[error("offline and no cached copy of {0}")]
    Offline(String),
}

/// Errors raised by the offline cache worker lifecycle.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Bulk population failed; nothing was written to the cache.
    #[error("install failed while caching {path}: {source}")]
    InstallFailed {
        path: String,
        #[source]
        source: FetchError,
    },

    /// `activate` was called on a worker that never installed.
    #[error("cache worker {0} is not installed")]
    NotInstalled(String),
}

/// Errors raised by the local notification flow.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No notification sink is configured for this deployment.
    #[error("notifications are not supported")]
    Unsupported,

    /// The user has not granted notification permission yet.
    #[error("notification permission has not been granted")]
    PermissionRequired,

    /// The sink rejected or failed to deliver the notification.
    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

/// Errors raised while persisting preferences.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
