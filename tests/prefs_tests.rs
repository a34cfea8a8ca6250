use std::path::PathBuf;

use creator_hub_lambda_rust::config::{HubConfig, DEFAULT_CACHE_NAME, DEFAULT_DISPLAY_TZ};
use creator_hub_lambda_rust::error::NotifyError;
use creator_hub_lambda_rust::i18n::Locale;
use creator_hub_lambda_rust::notify::{alert_for, Notifications, Permission, WebhookNotifier};
use creator_hub_lambda_rust::prefs::{PreferenceStore, Preferences, Theme};

fn temp_prefs_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("creatorhub-test-{}", uuid::Uuid::new_v4().simple()))
        .join("prefs.json")
}

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
}

#[test]
fn config_defaults_without_env() {
    let cfg = HubConfig::from_lookup(|_| None);
    assert_eq!(cfg.base_url.as_str(), "http://localhost:8080/");
    assert_eq!(cfg.display_tz, DEFAULT_DISPLAY_TZ);
    assert_eq!(cfg.embed_parent, "localhost");
    assert_eq!(cfg.cache_name, DEFAULT_CACHE_NAME);
    assert!(cfg.notify_webhook_url.is_none());
}

#[test]
fn config_reads_values() {
    let cfg = HubConfig::from_lookup(lookup(&[
        ("HUB_BASE_URL", "https://hub.example.com/site"),
        ("HUB_DISPLAY_TZ", "America/New_York"),
        ("HUB_NOTIFY_WEBHOOK_URL", "https://hooks.example.com/abc"),
        ("HUB_CACHE_NAME", "creatorhub-v2"),
        ("HUB_PREFS_PATH", ""),
    ]));
    assert_eq!(cfg.base_url.as_str(), "https://hub.example.com/site/");
    assert_eq!(cfg.display_tz, chrono_tz::America::New_York);
    assert_eq!(cfg.embed_parent, "hub.example.com");
    assert_eq!(cfg.notify_webhook_url.as_deref(), Some("https://hooks.example.com/abc"));
    assert_eq!(cfg.cache_name, "creatorhub-v2");
    assert!(cfg.prefs_path.is_none());
}

#[test]
fn config_invalid_values_keep_defaults() {
    let cfg = HubConfig::from_lookup(lookup(&[
        ("HUB_BASE_URL", "not a url"),
        ("HUB_DISPLAY_TZ", "Mars/Olympus"),
        ("HUB_EMBED_PARENT", "  "),
        ("HUB_NOTIFY_WEBHOOK_URL", " "),
    ]));
    assert_eq!(cfg.base_url.as_str(), "http://localhost:8080/");
    assert_eq!(cfg.display_tz, DEFAULT_DISPLAY_TZ);
    assert_eq!(cfg.embed_parent, "localhost");
    assert!(cfg.notify_webhook_url.is_none());
}

#[test]
fn prefs_missing_file_yields_defaults() {
    let store = PreferenceStore::load(Some(temp_prefs_path()));
    assert_eq!(store.get(), &Preferences::default());
    assert_eq!(store.get().locale, Locale::Ko);
    assert_eq!(store.get().theme, Theme::Light);
}

#[test]
fn prefs_toggles_persist_across_loads() {
    let path = temp_prefs_path();
    let mut store = PreferenceStore::load(Some(path.clone()));
    assert_eq!(store.toggle_locale().unwrap(), Locale::En);
    assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
    store.set_notifications_on().unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["locale"], "en");
    assert_eq!(raw["theme"], "dark");
    assert_eq!(raw["notifications"], "on");

    let reloaded = PreferenceStore::load(Some(path.clone()));
    assert_eq!(reloaded.get().locale, Locale::En);
    assert!(reloaded.get().notifications_on());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn prefs_malformed_file_yields_defaults() {
    let path = temp_prefs_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();
    let store = PreferenceStore::load(Some(path.clone()));
    assert_eq!(store.get(), &Preferences::default());
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn notifications_unsupported_without_sink() {
    let notifications = Notifications::new(None);
    let mut prefs = PreferenceStore::in_memory(Preferences::default());
    assert!(!notifications.supported());
    assert!(matches!(notifications.request_permission(&mut prefs, Locale::Ko), Err(NotifyError::Unsupported)));
    assert!(!prefs.get().notifications_on());
}

#[test]
fn test_notification_requires_permission() {
    // Permission is checked before anything is sent, so the sink url is never contacted.
    let notifications = Notifications::new(Some(WebhookNotifier::new("http://127.0.0.1:9/hook".to_string())));
    let prefs = PreferenceStore::in_memory(Preferences::default());
    assert!(notifications.supported());
    assert_eq!(notifications.permission(&prefs), Permission::Default);
    assert!(matches!(notifications.send_test(&prefs, Locale::Ko), Err(NotifyError::PermissionRequired)));
}

#[test]
fn granted_permission_is_not_requested_again() {
    let notifications = Notifications::new(Some(WebhookNotifier::new("http://127.0.0.1:9/hook".to_string())));
    let mut prefs =
        PreferenceStore::in_memory(Preferences { notifications: Some("on".to_string()), ..Preferences::default() });
    assert_eq!(notifications.permission(&prefs), Permission::Granted);
    assert_eq!(notifications.request_permission(&mut prefs, Locale::Ko).unwrap(), Permission::Granted);
}

#[test]
fn alerts_only_for_blocking_errors() {
    assert_eq!(alert_for(&NotifyError::PermissionRequired, Locale::Ko).as_deref(), Some("상단에서 알림을 먼저 허용하세요."));
    assert!(alert_for(&NotifyError::Delivery("timeout".to_string()), Locale::En).is_none());
}
