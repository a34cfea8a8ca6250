use crate::i18n::t;
use crate::markup::{el, Element, Node};
use crate::prefs::Theme;
use crate::router::Route;
use crate::state::AppState;
use crate::views::ViewContext;

const NAV: &[&str] = &["home", "live", "schedule", "vod", "team", "support", "notices"];

/// Names of live creators for the banner, or `None` when nobody is live.
pub fn live_banner_text(state: &AppState) -> Option<String> {
    let names: Vec<&str> = state.live_creators().map(|c| c.name.as_str()).collect();
    if names.is_empty() {
        return None;
    }
    Some(format!("{}{}", t(state.locale, "live.banner"), names.join(", ")))
}

/// Wrap a rendered view in the page shell. The view always fills the `#app`
/// mount point entirely.
pub fn page(route: &Route, state: &AppState, ctx: &ViewContext, view: Node) -> Node {
    let root = el("div")
        .id("root")
        .attr("lang", state.locale.code())
        .attr("data-route", route.token());
    let root = match ctx.theme {
        Theme::Dark => root.class("dark"),
        Theme::Light => root,
    };

    root.child(header(route, state))
        .child(el("main").id("app").child(view))
        .into()
}

fn header(route: &Route, state: &AppState) -> Element {
    let l = state.locale;
    let nav = el("nav").children(NAV.iter().map(|token| -> Node {
        let href = if *token == "home" { "#/".to_string() } else { format!("#/{}", token) };
        let link = el("a").href(&href).attr("data-route", *token);
        let link = if route.token() == *token { link.class("route-active") } else { link };
        link.text(t(l, &format!("nav.{}", token))).into()
    }));

    let banner = match live_banner_text(state) {
        Some(text) => el("div")
            .id("live-now-badge")
            .child(el("span").class("badge ring-red-200 bg-red-50 text-red-700").text("LIVE"))
            .child(el("span").id("live-now-text").text(text)),
        None => el("div").id("live-now-badge").class("hidden"),
    };

    el("header")
        .child(nav)
        .child(banner)
        .child(
            el("button")
                .id("locale-toggle")
                .attr("data-action", "toggle_locale")
                .text(l.toggle_label()),
        )
        .child(el("button").id("theme-toggle").attr("data-action", "toggle_theme").text("◐"))
        .child(el("button").id("notify-toggle").attr("data-action", "enable_notifications").text("🔔"))
}
