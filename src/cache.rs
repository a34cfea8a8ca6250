//! Offline cache worker.
//!
//! Sits in front of a [`Fetch`] implementation and serves in-scope requests
//! cache-first. Lifecycle mirrors a browser service worker:
//!
//! 1. `install` eagerly fetches every manifest path. The population is all or
//!    nothing: if one fetch fails, nothing is stored and the worker becomes
//!    redundant.
//! 2. `activate` takes control immediately; from then on every fetch passes
//!    through the cache.
//! 3. On a hit the cached copy is served as is. On a miss the network response is
//!    stored for the next request. A network failure falls back to whatever the
//!    cache holds for that key at that point. With nothing cached, an unreachable
//!    network is reported as [`FetchError::Offline`] and any other error as is.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, error, info, instrument, warn};
use url::{Origin, Url};

use crate::error::{CacheError, FetchError};
use crate::fetch::{Fetch, FetchedResponse};

/// Paths cached at install time: the application shell plus every data file.
pub const PRECACHE_MANIFEST: &[&str] = &[
    "/",
    "/index.html",
    "/app.js",
    "/assets/icon.svg",
    "/assets/og-image.png",
    "/data/creators.json",
    "/data/schedule.json",
    "/data/vods.json",
    "/data/teams.json",
    "/data/support.json",
    "/data/notices.json",
    "/data/feature_flags.json",
    "/config.json",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Constructed, not installed yet; requests go straight to the network.
    Parsed,
    Installed,
    /// Controlling requests.
    Activated,
    /// Install failed; the worker never controls requests.
    Redundant,
}

#[derive(Debug)]
pub struct CacheWorker<F> {
    name: String,
    scope: Url,
    manifest: Vec<String>,
    network: F,
    entries: RwLock<HashMap<String, FetchedResponse>>,
    state: RwLock<WorkerState>,
}

impl<F: Fetch> CacheWorker<F> {
    pub fn new(name: impl Into<String>, scope: Url, network: F) -> Self {
        Self::with_manifest(name, scope, network, PRECACHE_MANIFEST.iter().map(|p| p.to_string()).collect())
    }

    pub fn with_manifest(name: impl Into<String>, scope: Url, network: F, manifest: Vec<String>) -> Self {
        Self {
            name: name.into(),
            scope,
            manifest,
            network,
            entries: RwLock::new(HashMap::new()),
            state: RwLock::new(WorkerState::Parsed),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> WorkerState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn cached_len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_cached(&self, url: &Url) -> bool {
        self.lookup(url).is_some()
    }

    /// Populate the cache with every manifest entry.
    #[instrument(level = "info", skip(self), fields(cache = %self.name, entries = self.manifest.len()))]
    pub fn install(&self) -> Result<(), CacheError> {
        let mut fetched = Vec::with_capacity(self.manifest.len());
        for path in &self.manifest {
            let outcome = self
                .scope
                .join(path)
                .map_err(|source| FetchError::Url { path: path.clone(), source })
                .and_then(|url| self.network.fetch(&url).map(|resp| (url, resp)));
            match outcome {
                Ok((url, resp)) => fetched.push((cache_key(&url), resp)),
                Err(source) => {
                    error!(path = %path, error = %source, "Precache failed; install aborted");
                    self.set_state(WorkerState::Redundant);
                    return Err(CacheError::InstallFailed { path: path.clone(), source });
                }
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.extend(fetched);
        drop(entries);
        self.set_state(WorkerState::Installed);
        info!("Cache worker installed");
        Ok(())
    }

    /// Take control of requests immediately.
    pub fn activate(&self) -> Result<(), CacheError> {
        match self.state() {
            WorkerState::Installed | WorkerState::Activated => {
                self.set_state(WorkerState::Activated);
                info!(cache = %self.name, "Cache worker activated");
                Ok(())
            }
            _ => Err(CacheError::NotInstalled(self.name.clone())),
        }
    }

    /// Whether a request is subject to cache-first handling: its path is in the
    /// manifest or it targets the worker's own origin.
    pub fn intercepts(&self, url: &Url) -> bool {
        self.manifest.iter().any(|p| p == url.path()) || same_origin(&url.origin(), &self.scope.origin())
    }

    fn lookup(&self, url: &Url) -> Option<FetchedResponse> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&cache_key(url))
            .cloned()
    }

    fn put(&self, url: &Url, response: FetchedResponse) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(cache_key(url), response);
    }

    fn set_state(&self, next: WorkerState) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = next;
    }
}

impl<F: Fetch> Fetch for CacheWorker<F> {
    fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError> {
        if self.state() != WorkerState::Activated || !self.intercepts(url) {
            return self.network.fetch(url);
        }

        if let Some(hit) = self.lookup(url) {
            debug!(url = %url, "Cache hit");
            return Ok(hit);
        }

        match self.network.fetch(url) {
            Ok(response) => {
                self.put(url, response.clone());
                debug!(url = %url, "Cache miss; stored network copy");
                Ok(response)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Network failed on cache miss");
                match (self.lookup(url), e) {
                    (Some(cached), _) => Ok(cached),
                    (None, FetchError::Transport(_)) => Err(FetchError::Offline(url.to_string())),
                    (None, e) => Err(e),
                }
            }
        }
    }
}

/// Requests are keyed by their URL without the fragment.
fn cache_key(url: &Url) -> String {
    let mut key = url.clone();
    key.set_fragment(None);
    key.into()
}

fn same_origin(a: &Origin, b: &Origin) -> bool {
    a.is_tuple() && a == b
}
