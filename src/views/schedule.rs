use std::collections::BTreeMap;

use chrono_tz::Tz;

use crate::i18n::t;
use crate::markup::{el, Node};
use crate::model::schedule::ScheduleEvent;
use crate::state::AppState;
use crate::views::ViewContext;

/// Static calendar published next to the data files.
pub const STATIC_ICS_PATH: &str = "data/schedule.ics";

/// Group events by calendar day of their start in `tz` (`YYYY-MM-DD`), days ascending,
/// events within a day ascending by start. An unparseable start is grouped under the
/// first ten characters of its raw value.
pub fn group_by_day(schedule: &[ScheduleEvent], tz: Tz) -> BTreeMap<String, Vec<&ScheduleEvent>> {
    let mut days: BTreeMap<String, Vec<&ScheduleEvent>> = BTreeMap::new();
    for ev in schedule {
        let day = match ev.start_at() {
            Some(start) => start.with_timezone(&tz).format("%Y-%m-%d").to_string(),
            None => ev.start.chars().take(10).collect(),
        };
        days.entry(day).or_default().push(ev);
    }
    for events in days.values_mut() {
        events.sort_by_key(|ev| (ev.start_at().is_none(), ev.start_at()));
    }
    days
}

pub fn view(state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    let days = group_by_day(&state.schedule, ctx.tz);

    let header = el("div")
        .class("flex items-center justify-between")
        .child(el("h2").class("text-xl font-semibold").text(t(l, "schedule.weekly")))
        .child(
            el("div")
                .class("flex items-center gap-2")
                .child(
                    el("button")
                        .id("btn-ical")
                        .class("text-sm underline")
                        .attr("data-action", "export_ics")
                        .text(t(l, "schedule.export")),
                )
                .child(
                    el("a")
                        .class("text-sm underline")
                        .href(STATIC_ICS_PATH)
                        .attr("download", "")
                        .text(t(l, "schedule.static")),
                ),
        );

    el("section")
        .class("space-y-4")
        .child(header)
        .children(days.iter().map(|(day, events)| day_table(day, events, state, ctx)))
        .into()
}

fn day_table(day: &str, events: &[&ScheduleEvent], state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    let th = |key: &str| -> Node { el("th").class("py-2 pr-4").text(t(l, key)).into() };
    let head = el("thead").child(el("tr").class("text-left text-gray-600").children([
        Node::from(el("th").class("py-2 pr-4").text(format!("{}({})", t(l, "schedule.time"), ctx.tz_label()))),
        th("schedule.name"),
        th("schedule.participants"),
        th("schedule.platform"),
        th("schedule.link"),
    ]));

    let rows = events.iter().map(|ev| -> Node {
        let td = || el("td").class("py-2 pr-4");
        let link = match ev.stream_url.as_deref() {
            Some(url) => td().child(
                el("a")
                    .class("underline")
                    .attr("target", "_blank")
                    .href(url)
                    .text(t(l, "schedule.watch")),
            ),
            None => td(),
        };
        el("tr")
            .class("border-t")
            .attr("data-event-id", ev.id.clone().unwrap_or_default())
            .child(td().text(ctx.fmt_date(&ev.start)))
            .child(td().text(ev.title.as_str()))
            .child(td().text(ev.participants.join(", ")))
            .child(td().text(ev.platform.clone().unwrap_or_default()))
            .child(link)
            .into()
    });

    el("div")
        .attr("data-day", day)
        .child(el("h3").class("text-lg font-semibold").text(day))
        .child(
            el("div")
                .class("mt-2 overflow-x-auto")
                .child(el("table").class("min-w-full text-sm").child(head).child(el("tbody").children(rows))),
        )
        .into()
}
