//! Hash-fragment router.
//!
//! `Route::parse` is the only place a fragment is interpreted. Every fragment maps
//! to exactly one `Route`; tokens that name no route map to `Route::Home`.
//! `Router::navigate` is the transition: parse, mark the nav entry, run the bound
//! view, replace the whole mount point. Navigating to the current route renders again.

use tracing::info;

use crate::markup::decode_component;
use crate::state::AppState;
use crate::views::{self, ViewContext, ViewInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportTab {
    #[default]
    Support,
    Merch,
}

impl SupportTab {
    fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("merch") => SupportTab::Merch,
            _ => SupportTab::Support,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SupportTab::Support => "support",
            SupportTab::Merch => "merch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Live,
    Schedule,
    Vod,
    Team,
    Support { tab: SupportTab },
    Notices,
    Creator { id: String },
    Admin,
    Privacy,
}

impl Route {
    /// Parse a URL fragment (`#/creator/c1`, `#/support?tab=merch`, `#/`, ``).
    pub fn parse(fragment: &str) -> Self {
        let Fragment { segments, query } = Fragment::split(fragment);
        let mut segments = segments.into_iter();
        let token = segments.next().unwrap_or_default();

        match token.as_str() {
            "live" => Route::Live,
            "schedule" => Route::Schedule,
            "vod" => Route::Vod,
            "team" => Route::Team,
            "support" => {
                let tab = query
                    .iter()
                    .find(|(k, _)| k == "tab")
                    .map(|(_, v)| v.as_str());
                Route::Support { tab: SupportTab::from_query(tab) }
            }
            "notices" => Route::Notices,
            "creator" => Route::Creator { id: segments.next().unwrap_or_default() },
            "admin" => Route::Admin,
            "privacy" => Route::Privacy,
            _ => Route::Home,
        }
    }

    /// Route token, also the `data-route` value of the matching nav entry.
    pub fn token(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Live => "live",
            Route::Schedule => "schedule",
            Route::Vod => "vod",
            Route::Team => "team",
            Route::Support { .. } => "support",
            Route::Notices => "notices",
            Route::Creator { .. } => "creator",
            Route::Admin => "admin",
            Route::Privacy => "privacy",
        }
    }
}

/// Path segments and query pairs of a fragment, percent-decoded.
#[derive(Debug, Default)]
struct Fragment {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Fragment {
    fn split(fragment: &str) -> Self {
        let body = fragment.trim().trim_start_matches('#');
        let (path, query) = match body.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (body, None),
        };
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_component)
            .collect();
        let query = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { segments, query }
    }
}

/// Result of one navigation.
#[derive(Debug, Clone)]
pub struct Page {
    pub route: Route,
    pub html: String,
}

#[derive(Debug, Default)]
pub struct Router {
    current: Option<Route>,
    renders: u64,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Handle a fragment change and return the full page markup.
    pub fn navigate(&mut self, fragment: &str, state: &AppState, ctx: &ViewContext, inputs: &ViewInputs) -> Page {
        let route = Route::parse(fragment);
        info!(fragment, route = route.token(), previous = ?self.current.as_ref().map(Route::token), "Dispatching route");

        let view = views::render(&route, state, ctx, inputs);
        let html = views::shell::page(&route, state, ctx, view).render();

        self.current = Some(route.clone());
        self.renders += 1;
        Page { route, html }
    }
}
