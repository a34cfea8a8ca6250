use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::config::HubConfig;
use crate::ical::{self, ICS_CONTENT_TYPE, ICS_FILENAME};
use crate::notify::{self, Notifications, WebhookNotifier};
use crate::prefs::PreferenceStore;
use crate::router::Router;
use crate::state::AppState;
use crate::views::live::PlatformFilter;
use crate::views::{ViewContext, ViewInputs};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Render,
    ExportIcs,
    ToggleLocale,
    ToggleTheme,
    EnableNotifications,
    TestNotification,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// URL fragment, e.g. `#/creator/c1`. Empty means the root route.
    #[serde(default)]
    pub fragment: String,
    #[serde(default)]
    pub action: Action,
    /// VOD search box contents.
    #[serde(default)]
    pub search: Option<String>,
    /// Live hub platform select.
    #[serde(default)]
    pub platform: PlatformFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub route: String,
    pub content_type: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Blocking user-facing message (unsupported capability, missing permission).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

/// Everything a warm container keeps between invocations.
#[derive(Debug)]
pub struct Hub {
    config: HubConfig,
    state: RwLock<AppState>,
    router: Mutex<Router>,
    prefs: Mutex<PreferenceStore>,
    notifications: Notifications,
}

impl Hub {
    /// Assemble the hub from loaded state. The state's locale is taken from the
    /// preferences, which are read once here.
    pub fn new(config: HubConfig, mut state: AppState, prefs: PreferenceStore) -> Self {
        state.locale = prefs.get().locale;
        let notifications = Notifications::new(config.notify_webhook_url.clone().map(WebhookNotifier::new));
        Self {
            config,
            state: RwLock::new(state),
            router: Mutex::new(Router::new()),
            prefs: Mutex::new(prefs),
            notifications,
        }
    }

    pub fn state(&self) -> AppState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Handle one request at the given instant.
    pub fn handle(&self, req: &Request, now: DateTime<Utc>) -> Response {
        let mut alert = None;

        match req.action {
            Action::ExportIcs => {
                let state = self.state.read().unwrap_or_else(|e| e.into_inner());
                return Response {
                    route: "schedule".to_string(),
                    content_type: ICS_CONTENT_TYPE.to_string(),
                    body: ical::to_ics(&state.schedule),
                    filename: Some(ICS_FILENAME.to_string()),
                    alert: None,
                };
            }
            // A failed save only loses persistence; the toggle still applies to this container.
            Action::ToggleLocale => {
                let mut prefs = self.lock_prefs();
                if let Err(e) = prefs.toggle_locale() {
                    error!(error = %e, "Failed to persist locale");
                }
                let locale = prefs.get().locale;
                drop(prefs);
                self.state.write().unwrap_or_else(|e| e.into_inner()).locale = locale;
                info!(locale = locale.code(), "Locale toggled");
            }
            Action::ToggleTheme => {
                let mut prefs = self.lock_prefs();
                if let Err(e) = prefs.toggle_theme() {
                    error!(error = %e, "Failed to persist theme");
                }
                info!(theme = ?prefs.get().theme, "Theme toggled");
            }
            Action::EnableNotifications => {
                let locale = self.locale();
                if let Err(e) = self.notifications.request_permission(&mut self.lock_prefs(), locale) {
                    warn!(error = %e, "Notification permission flow failed");
                    alert = notify::alert_for(&e, locale);
                }
            }
            Action::TestNotification => {
                let locale = self.locale();
                if let Err(e) = self.notifications.send_test(&self.lock_prefs(), locale) {
                    warn!(error = %e, "Test notification failed");
                    alert = notify::alert_for(&e, locale);
                }
            }
            Action::Render => {}
        }

        let ctx = self.view_context(now);
        let inputs = ViewInputs { search: req.search.clone().unwrap_or_default(), platform: req.platform.clone() };
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let page = self
            .router
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .navigate(&req.fragment, &state, &ctx, &inputs);

        Response {
            route: page.route.token().to_string(),
            content_type: HTML_CONTENT_TYPE.to_string(),
            body: page.html,
            filename: None,
            alert,
        }
    }

    fn view_context(&self, now: DateTime<Utc>) -> ViewContext {
        ViewContext {
            now,
            tz: self.config.display_tz,
            theme: self.lock_prefs().get().theme,
            embed_parent: self.config.embed_parent.clone(),
        }
    }

    fn locale(&self) -> crate::i18n::Locale {
        self.state.read().unwrap_or_else(|e| e.into_inner()).locale
    }

    fn lock_prefs(&self) -> MutexGuard<'_, PreferenceStore> {
        self.prefs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[instrument(skip(hub, event))]
pub async fn handler(hub: Arc<Hub>, event: LambdaEvent<Request>) -> Result<Response, Error> {
    let request = event.payload;
    info!(fragment = %request.fragment, action = ?request.action, "Handling request");

    // Notification delivery blocks on the network, so the whole request runs off the runtime threads.
    let response = tokio::task::spawn_blocking(move || hub.handle(&request, Utc::now())).await?;
    Ok(response)
}
