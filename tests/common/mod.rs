#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use creator_hub_lambda_rust::error::FetchError;
use creator_hub_lambda_rust::fetch::{Fetch, FetchedResponse};
use creator_hub_lambda_rust::state::AppState;
use url::Url;

pub const ORIGIN: &str = "https://hub.example.com/";

pub fn origin() -> Url {
    Url::parse(ORIGIN).unwrap()
}

pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/sample_hub")
}

/// Serves files under `tests/sample_hub` by URL path; can be switched offline.
pub struct FixtureFetcher {
    root: PathBuf,
    online: AtomicBool,
    calls: AtomicUsize,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self { root: fixture_root(), online: AtomicBool::new(true), calls: AtomicUsize::new(0) }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.online.load(Ordering::SeqCst) {
            return Err(FetchError::Transport("network unreachable".to_string()));
        }
        let path = self.root.join(url.path().trim_start_matches('/'));
        match std::fs::read_to_string(&path) {
            Ok(body) => Ok(FetchedResponse { status: 200, content_type: Some("application/json".to_string()), body }),
            Err(_) => Err(FetchError::Status(404)),
        }
    }
}

fn read_fixture<T: serde::de::DeserializeOwned>(rel: &str) -> T {
    let raw = std::fs::read_to_string(fixture_root().join(rel)).unwrap_or_else(|e| panic!("failed to read {}: {}", rel, e));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse {}: {}", rel, e))
}

/// Application state built straight from the fixture files.
pub fn sample_state() -> AppState {
    AppState {
        site: read_fixture("config.json"),
        feature_flags: read_fixture("data/feature_flags.json"),
        creators: read_fixture("data/creators.json"),
        schedule: read_fixture("data/schedule.json"),
        vods: read_fixture("data/vods.json"),
        teams: read_fixture("data/teams.json"),
        support: read_fixture("data/support.json"),
        notices: read_fixture("data/notices.json"),
        demo: false,
        ..AppState::default()
    }
}

/// 2024-03-05 00:00 UTC: events 1 and 4 are past, the rest upcoming.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()
}
