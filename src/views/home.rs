use chrono::{DateTime, Utc};

use crate::i18n::t;
use crate::markup::{el, encode_component, Node};
use crate::model::notice::Notice;
use crate::model::schedule::ScheduleEvent;
use crate::model::vod::Vod;
use crate::state::AppState;
use crate::views::ViewContext;

pub const HOME_UPCOMING_LIMIT: usize = 6;
pub const HOME_VOD_LIMIT: usize = 6;
pub const HOME_NOTICE_LIMIT: usize = 5;

/// Events starting strictly after `now`, earliest first, at most six.
/// Events without a parseable start are never upcoming.
pub fn upcoming(schedule: &[ScheduleEvent], now: DateTime<Utc>) -> Vec<&ScheduleEvent> {
    let mut events: Vec<(DateTime<Utc>, &ScheduleEvent)> = schedule
        .iter()
        .filter_map(|ev| ev.start_at().map(|start| (start, ev)))
        .filter(|(start, _)| *start > now)
        .collect();
    events.sort_by_key(|(start, _)| *start);
    events.into_iter().take(HOME_UPCOMING_LIMIT).map(|(_, ev)| ev).collect()
}

/// All VODs, newest first, at most six. Undated VODs sort last.
pub fn newest_vods(vods: &[Vod]) -> Vec<&Vod> {
    let mut sorted: Vec<&Vod> = vods.iter().collect();
    sorted.sort_by(|a, b| b.published().cmp(&a.published()));
    sorted.truncate(HOME_VOD_LIMIT);
    sorted
}

/// First five notices in source order.
pub fn latest_notices(notices: &[Notice]) -> &[Notice] {
    &notices[..notices.len().min(HOME_NOTICE_LIMIT)]
}

pub fn view(state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    Node::Fragment(vec![
        el("section")
            .class("space-y-4")
            .id("home-upcoming")
            .child(section_header(&t(l, "home.upcoming"), "#/schedule", &t(l, "home.seeAll")))
            .child(
                el("div")
                    .class("grid-cards")
                    .children(upcoming(&state.schedule, ctx.now).into_iter().map(|ev| event_card(ev, state, ctx))),
            )
            .into(),
        el("section")
            .class("space-y-4")
            .id("home-vods")
            .child(section_header(&t(l, "home.newVods"), "#/vod", &t(l, "home.seeAll")))
            .child(
                el("div")
                    .class("grid-cards")
                    .children(newest_vods(&state.vods).into_iter().map(|v| super::vod::vod_card(v, state, ctx, false))),
            )
            .into(),
        el("section")
            .class("space-y-2")
            .id("home-notices")
            .child(el("h2").class("text-xl font-semibold").text(t(l, "home.notices")))
            .child(el("ul").class("list-disc pl-6").children(latest_notices(&state.notices).iter().map(|n| -> Node {
                el("li")
                    .child(el("a").class("underline").href("#/notices").text(n.title.as_str()))
                    .text(" ")
                    .child(
                        el("span")
                            .class("text-xs text-gray-500")
                            .text(n.date.as_deref().map(|d| ctx.fmt_date(d)).unwrap_or_default()),
                    )
                    .into()
            })))
            .into(),
    ])
}

fn section_header(title: &str, href: &str, link_label: &str) -> Node {
    el("div")
        .class("flex items-center justify-between")
        .child(el("h2").class("text-xl font-semibold").text(title))
        .child(el("a").class("text-sm text-indigo-600 hover:underline").href(href).text(link_label))
        .into()
}

fn event_card(ev: &ScheduleEvent, state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    let creator_link: Option<Node> = ev
        .creator_id
        .as_deref()
        .or_else(|| ev.participants.first().map(String::as_str))
        .map(|id| {
            el("a")
                .class("text-sm underline")
                .href(&format!("#/creator/{}", encode_component(id)))
                .text(t(l, "home.creator"))
                .into()
        });
    let watch_link: Option<Node> = ev.stream_url.as_deref().map(|url| {
        el("a")
            .class("text-sm underline")
            .attr("target", "_blank")
            .href(url)
            .text(t(l, "home.watch"))
            .into()
    });

    el("article")
        .class("card")
        .attr("data-event-id", ev.id.clone().unwrap_or_default())
        .child(
            el("div")
                .class("flex items-center justify-between")
                .child(el("h3").class("font-semibold").text(ev.title.as_str()))
                .child(
                    el("span")
                        .class("badge ring-indigo-200 bg-indigo-50 text-indigo-700")
                        .text(ev.platform.clone().unwrap_or_default()),
                ),
        )
        .child(
            el("p")
                .class("mt-1 text-sm text-gray-600")
                .text(format!("{} ({})", ctx.fmt_date(&ev.start), ctx.tz_label())),
        )
        .child(el("p").class("mt-1 text-xs text-gray-500").text(ev.participants.join(", ")))
        .child(el("div").class("mt-3 flex gap-2").children(creator_link.into_iter().chain(watch_link)))
        .into()
}
