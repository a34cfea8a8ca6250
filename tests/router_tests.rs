mod common;

use creator_hub_lambda_rust::router::{Route, Router, SupportTab};
use creator_hub_lambda_rust::views::{ViewContext, ViewInputs};

#[test]
fn parses_every_documented_fragment() {
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("#/"), Route::Home);
    assert_eq!(Route::parse("#/live"), Route::Live);
    assert_eq!(Route::parse("#/schedule"), Route::Schedule);
    assert_eq!(Route::parse("#/vod"), Route::Vod);
    assert_eq!(Route::parse("#/team"), Route::Team);
    assert_eq!(Route::parse("#/support"), Route::Support { tab: SupportTab::Support });
    assert_eq!(Route::parse("#/support?tab=merch"), Route::Support { tab: SupportTab::Merch });
    assert_eq!(Route::parse("#/support?tab=support"), Route::Support { tab: SupportTab::Support });
    assert_eq!(Route::parse("#/notices"), Route::Notices);
    assert_eq!(Route::parse("#/creator/c1"), Route::Creator { id: "c1".to_string() });
    assert_eq!(Route::parse("#/admin"), Route::Admin);
    assert_eq!(Route::parse("#/privacy"), Route::Privacy);
}

#[test]
fn unknown_tokens_fall_back_to_home() {
    for fragment in ["#/nope", "#/LIVE", "#///", "garbage", "#/support-ish"] {
        assert_eq!(Route::parse(fragment), Route::Home, "fragment: {}", fragment);
    }
}

#[test]
fn unknown_support_tab_selects_support() {
    assert_eq!(Route::parse("#/support?tab=bogus"), Route::Support { tab: SupportTab::Support });
}

#[test]
fn creator_ids_are_percent_decoded() {
    assert_eq!(Route::parse("#/creator/%ED%95%9C%EA%B8%80"), Route::Creator { id: "한글".to_string() });
    assert_eq!(Route::parse("#/creator/a+b"), Route::Creator { id: "a+b".to_string() });
    assert_eq!(Route::parse("#/creator"), Route::Creator { id: String::new() });
}

#[test]
fn unknown_route_renders_same_markup_as_root() {
    let state = common::sample_state();
    let ctx = ViewContext::new(common::fixed_now());
    let inputs = ViewInputs::default();
    let mut router = Router::new();

    let root = router.navigate("#/", &state, &ctx, &inputs);
    let unknown = router.navigate("#/does-not-exist", &state, &ctx, &inputs);
    assert_eq!(root.html, unknown.html);
    assert_eq!(unknown.route, Route::Home);
}

#[test]
fn navigating_twice_renders_twice() {
    let state = common::sample_state();
    let ctx = ViewContext::new(common::fixed_now());
    let inputs = ViewInputs::default();
    let mut router = Router::new();

    let first = router.navigate("#/vod", &state, &ctx, &inputs);
    let second = router.navigate("#/vod", &state, &ctx, &inputs);
    assert_eq!(router.renders(), 2);
    assert_eq!(first.html, second.html);
    assert_eq!(router.current(), Some(&Route::Vod));
}

#[test]
fn marks_the_active_nav_entry() {
    let state = common::sample_state();
    let ctx = ViewContext::new(common::fixed_now());
    let mut router = Router::new();

    let page = router.navigate("#/schedule", &state, &ctx, &ViewInputs::default());
    assert!(page.html.contains(r#"data-route="schedule" class="route-active""#), "html was: {}", page.html);
    assert!(!page.html.contains(r#"data-route="home" class="route-active""#));
}

#[test]
fn inputs_are_not_carried_across_navigations() {
    let state = common::sample_state();
    let ctx = ViewContext::new(common::fixed_now());
    let mut router = Router::new();

    let searched = ViewInputs { search: "kimchi".to_string(), ..ViewInputs::default() };
    let filtered = router.navigate("#/vod", &state, &ctx, &searched);
    assert!(!filtered.html.contains("Any% world record attempt"));

    let fresh = router.navigate("#/vod", &state, &ctx, &ViewInputs::default());
    assert!(fresh.html.contains("Any% world record attempt"));
}
