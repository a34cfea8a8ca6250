use tracing::{error, info};

use crate::error::{NotifyError, PrefsError};
use crate::i18n::{self, Locale};
use crate::prefs::PreferenceStore;

/// Webhook sink that receives local notifications as a `content` message.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    hook_url: String,
}

impl WebhookNotifier {
    pub fn new(hook_url: String) -> Self {
        Self { hook_url }
    }

    pub fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let payload = serde_json::json!({ "content": format!("**{}**\n{}", title, body) });
        match ureq::post(&self.hook_url).send_json(payload) {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), "Delivered notification");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to deliver notification");
                Err(NotifyError::Delivery(e.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Default,
    Granted,
}

/// Client-local notification flow: permission once, persisted flag, local delivery.
#[derive(Debug, Clone)]
pub struct Notifications {
    sink: Option<WebhookNotifier>,
}

impl Notifications {
    pub fn new(sink: Option<WebhookNotifier>) -> Self {
        Self { sink }
    }

    pub fn supported(&self) -> bool {
        self.sink.is_some()
    }

    pub fn permission(&self, prefs: &PreferenceStore) -> Permission {
        if prefs.get().notifications_on() { Permission::Granted } else { Permission::Default }
    }

    /// Grant permission (once), persist the flag and announce it.
    /// Already-granted permission is not requested again.
    pub fn request_permission(&self, prefs: &mut PreferenceStore, locale: Locale) -> Result<Permission, NotifyError> {
        let sink = self.sink.as_ref().ok_or(NotifyError::Unsupported)?;
        if self.permission(prefs) == Permission::Granted {
            return Ok(Permission::Granted);
        }
        prefs.set_notifications_on().map_err(persist_error)?;
        sink.notify(&i18n::t(locale, "notify.enabled"), &i18n::t(locale, "notify.enabledBody"))?;
        Ok(Permission::Granted)
    }

    /// Manual trigger from the admin panel.
    pub fn send_test(&self, prefs: &PreferenceStore, locale: Locale) -> Result<(), NotifyError> {
        let sink = self.sink.as_ref().ok_or(NotifyError::Unsupported)?;
        if self.permission(prefs) != Permission::Granted {
            return Err(NotifyError::PermissionRequired);
        }
        sink.notify(&i18n::t(locale, "notify.test"), &i18n::t(locale, "notify.testBody"))
    }
}

fn persist_error(e: PrefsError) -> NotifyError {
    NotifyError::Delivery(format!("could not persist permission: {}", e))
}

/// User-facing alert text for errors that must block the user (unsupported, no permission).
pub fn alert_for(err: &NotifyError, locale: Locale) -> Option<String> {
    match err {
        NotifyError::Unsupported => Some(i18n::t(locale, "notify.unsupported")),
        NotifyError::PermissionRequired => Some(i18n::t(locale, "notify.permissionRequired")),
        NotifyError::Delivery(_) => None,
    }
}
