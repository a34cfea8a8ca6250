mod common;

use creator_hub_lambda_rust::config::HubConfig;
use creator_hub_lambda_rust::handler::{Action, Hub, Request, Response, HTML_CONTENT_TYPE};
use creator_hub_lambda_rust::i18n::Locale;
use creator_hub_lambda_rust::ical::{Ical, ICS_CONTENT_TYPE, ICS_FILENAME};
use creator_hub_lambda_rust::prefs::{PreferenceStore, Preferences, Theme};
use creator_hub_lambda_rust::views::live::PlatformFilter;

fn hub_with(prefs: Preferences) -> Hub {
    Hub::new(HubConfig::default(), common::sample_state(), PreferenceStore::in_memory(prefs))
}

fn hub() -> Hub {
    hub_with(Preferences::default())
}

fn request(fragment: &str, action: Action) -> Request {
    Request { fragment: fragment.to_string(), action, ..Request::default() }
}

#[test]
fn serde_action_is_snake_case() {
    let a: Action = serde_json::from_str("\"export_ics\"").unwrap();
    assert_eq!(a, Action::ExportIcs);
    let a: Action = serde_json::from_str("\"enable_notifications\"").unwrap();
    assert_eq!(a, Action::EnableNotifications);
    assert!(serde_json::from_str::<Action>("\"ExportIcs\"").is_err());
}

#[test]
fn request_fields_default() {
    let req: Request = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(req.fragment, "");
    assert_eq!(req.action, Action::Render);
    assert!(req.search.is_none());
    assert_eq!(req.platform, PlatformFilter::All);
}

#[test]
fn request_platform_outside_options_means_all() {
    let req: Request = serde_json::from_value(serde_json::json!({ "platform": "Kick" })).unwrap();
    assert_eq!(req.platform, PlatformFilter::All);
    let req: Request = serde_json::from_value(serde_json::json!({ "platform": "Twitch" })).unwrap();
    assert_eq!(req.platform, PlatformFilter::Only("Twitch".to_string()));
}

#[test]
fn response_skips_absent_optionals() {
    let resp = Response {
        route: "home".to_string(),
        content_type: HTML_CONTENT_TYPE.to_string(),
        body: "<div></div>".to_string(),
        filename: None,
        alert: None,
    };
    let v = serde_json::to_value(&resp).unwrap();
    assert!(v.get("filename").is_none());
    assert!(v.get("alert").is_none());
}

#[test]
fn render_returns_html_for_route() {
    let resp = hub().handle(&request("#/live", Action::Render), common::fixed_now());
    assert_eq!(resp.route, "live");
    assert_eq!(resp.content_type, HTML_CONTENT_TYPE);
    assert!(resp.body.contains("data-route=\"live\""));
    assert!(resp.filename.is_none());
    assert!(resp.alert.is_none());
}

#[test]
fn unknown_fragment_renders_home() {
    let resp = hub().handle(&request("#/does-not-exist", Action::Render), common::fixed_now());
    assert_eq!(resp.route, "home");
}

#[test]
fn export_ics_returns_calendar_download() {
    let resp = hub().handle(&request("#/schedule", Action::ExportIcs), common::fixed_now());
    assert_eq!(resp.content_type, ICS_CONTENT_TYPE);
    assert_eq!(resp.filename.as_deref(), Some(ICS_FILENAME));
    assert!(resp.body.starts_with("BEGIN:VCALENDAR"));
    assert_eq!(Ical::from_ics(&resp.body).events().len(), 6);
}

#[test]
fn search_input_filters_vods() {
    let h = hub();
    let req = Request { search: Some("zzz-no-match".to_string()), ..request("#/vod", Action::Render) };
    let filtered = h.handle(&req, common::fixed_now());
    let all = h.handle(&request("#/vod", Action::Render), common::fixed_now());
    assert!(filtered.body.len() < all.body.len());
}

#[test]
fn toggle_locale_switches_rendered_language() {
    let h = hub();
    let before = h.handle(&request("#/", Action::Render), common::fixed_now());
    assert!(before.body.contains("lang=\"ko\""));

    let after = h.handle(&request("#/", Action::ToggleLocale), common::fixed_now());
    assert!(after.body.contains("lang=\"en\""));
    assert_eq!(h.state().locale, Locale::En);

    // The choice sticks for later requests.
    let next = h.handle(&request("#/live", Action::Render), common::fixed_now());
    assert!(next.body.contains("lang=\"en\""));
}

#[test]
fn locale_comes_from_preferences() {
    let h = hub_with(Preferences { locale: Locale::En, ..Preferences::default() });
    assert_eq!(h.state().locale, Locale::En);
}

#[test]
fn toggle_theme_marks_root_dark() {
    let h = hub();
    let resp = h.handle(&request("#/", Action::ToggleTheme), common::fixed_now());
    assert!(resp.body.contains("class=\"dark\""));
    let resp = h.handle(&request("#/", Action::ToggleTheme), common::fixed_now());
    assert!(!resp.body.contains("class=\"dark\""));
}

#[test]
fn dark_theme_preference_is_applied() {
    let h = hub_with(Preferences { theme: Theme::Dark, ..Preferences::default() });
    let resp = h.handle(&request("#/", Action::Render), common::fixed_now());
    assert!(resp.body.contains("class=\"dark\""));
}

#[test]
fn enabling_notifications_without_sink_alerts() {
    let resp = hub().handle(&request("#/", Action::EnableNotifications), common::fixed_now());
    assert_eq!(resp.alert.as_deref(), Some("이 환경은 알림을 지원하지 않습니다."));
    assert_eq!(resp.route, "home");
}

#[test]
fn test_notification_without_sink_alerts() {
    let h = hub_with(Preferences { locale: Locale::En, ..Preferences::default() });
    let resp = h.handle(&request("#/admin", Action::TestNotification), common::fixed_now());
    assert_eq!(resp.alert.as_deref(), Some("Notifications are not supported here."));
    assert_eq!(resp.route, "admin");
}

/// A preference path whose parent is a regular file, so every save fails.
fn unwritable_prefs() -> PreferenceStore {
    let blocker = std::env::temp_dir().join(format!("creatorhub-blocker-{}", uuid::Uuid::new_v4().simple()));
    std::fs::write(&blocker, "not a directory").unwrap();
    PreferenceStore::load(Some(blocker.join("prefs.json")))
}

#[test]
fn toggles_apply_even_when_preferences_cannot_be_saved() {
    let h = Hub::new(HubConfig::default(), common::sample_state(), unwritable_prefs());

    let first = h.handle(&request("#/", Action::ToggleLocale), common::fixed_now());
    assert!(first.body.contains("lang=\"en\""), "body was: {}", first.body);
    assert_eq!(h.state().locale, Locale::En);

    let second = h.handle(&request("#/", Action::ToggleLocale), common::fixed_now());
    assert!(second.body.contains("lang=\"ko\""));

    let dark = h.handle(&request("#/", Action::ToggleTheme), common::fixed_now());
    assert!(dark.body.contains("class=\"dark\""));
}
