//! Runtime configuration read from the Lambda environment.

use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;
use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_CACHE_NAME: &str = "creatorhub-v1";
pub const DEFAULT_PREFS_PATH: &str = "/tmp/creatorhub-prefs.json";
pub const DEFAULT_DISPLAY_TZ: Tz = chrono_tz::Asia::Seoul;

#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Origin serving `config.json` and `data/*.json`.
    pub base_url: Url,
    /// Timezone used for every rendered date and for grouping the schedule by day.
    pub display_tz: Tz,
    /// Host passed to embeds that require a parent domain.
    pub embed_parent: String,
    pub prefs_path: Option<PathBuf>,
    pub notify_webhook_url: Option<String>,
    pub cache_name: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        let base_url = default_base_url();
        let embed_parent = base_url.host_str().unwrap_or("localhost").to_string();
        Self {
            base_url,
            display_tz: DEFAULT_DISPLAY_TZ,
            embed_parent,
            prefs_path: Some(PathBuf::from(DEFAULT_PREFS_PATH)),
            notify_webhook_url: None,
            cache_name: DEFAULT_CACHE_NAME.to_string(),
        }
    }
}

impl HubConfig {
    /// Build the configuration from `HUB_*` environment variables.
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("HUB_BASE_URL") {
            match Url::parse(&with_trailing_slash(&raw)) {
                Ok(url) => config.base_url = url,
                Err(e) => warn!(value = %raw, error = %e, "Invalid HUB_BASE_URL; using default"),
            }
        }
        config.embed_parent = match lookup("HUB_EMBED_PARENT") {
            Some(host) if !host.trim().is_empty() => host.trim().to_string(),
            _ => config.base_url.host_str().unwrap_or("localhost").to_string(),
        };
        if let Some(raw) = lookup("HUB_DISPLAY_TZ") {
            match raw.parse::<Tz>() {
                Ok(tz) => config.display_tz = tz,
                Err(e) => warn!(value = %raw, error = %e, "Invalid HUB_DISPLAY_TZ; using default"),
            }
        }
        if let Some(path) = lookup("HUB_PREFS_PATH") {
            config.prefs_path = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }
        config.notify_webhook_url = lookup("HUB_NOTIFY_WEBHOOK_URL").filter(|s| !s.trim().is_empty());
        if let Some(name) = lookup("HUB_CACHE_NAME").filter(|s| !s.trim().is_empty()) {
            config.cache_name = name;
        }

        config
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is an absolute url")
}

/// `Url::join` drops the last path segment unless it ends with '/'.
fn with_trailing_slash(raw: &str) -> String {
    if raw.ends_with('/') { raw.to_string() } else { format!("{}/", raw) }
}
