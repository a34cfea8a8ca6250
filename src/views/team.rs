use chrono::{DateTime, Utc};

use crate::i18n::t;
use crate::markup::{el, encode_component, Node};
use crate::model::schedule::ScheduleEvent;
use crate::model::team::Team;
use crate::state::AppState;
use crate::views::ViewContext;

pub const TEAM_EVENT_LIMIT: usize = 5;

/// Up to five events with at least one team member among the participants, in
/// source order. Upcoming events (start after `now`) are listed when there are
/// any; otherwise the team's whole history is eligible.
pub fn joint_events<'a>(team: &Team, schedule: &'a [ScheduleEvent], now: DateTime<Utc>) -> Vec<&'a ScheduleEvent> {
    let involved: Vec<&ScheduleEvent> = schedule.iter().filter(|ev| ev.involves_any(&team.members)).collect();
    let upcoming: Vec<&ScheduleEvent> = involved
        .iter()
        .copied()
        .filter(|ev| ev.start_at().is_some_and(|s| s > now))
        .collect();
    let pool = if upcoming.is_empty() { involved } else { upcoming };
    pool.into_iter().take(TEAM_EVENT_LIMIT).collect()
}

pub fn view(state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    el("section")
        .class("space-y-4")
        .child(el("h2").class("text-xl font-semibold").text(t(l, "team.title")))
        .child(el("div").class("grid-cards").children(state.teams.iter().map(|team| team_card(team, state, ctx))))
        .into()
}

fn team_card(team: &Team, state: &AppState, ctx: &ViewContext) -> Node {
    let members = team.resolve_members(&state.creators).into_iter().map(|c| -> Node {
        el("a")
            .href(&format!("#/creator/{}", encode_component(&c.id)))
            .class("badge ring-gray-200 bg-gray-50")
            .text(c.name.as_str())
            .into()
    });
    let events = joint_events(team, &state.schedule, ctx.now)
        .into_iter()
        .map(|ev| Node::from(el("li").text(format!("{} - {}", ctx.fmt_date(&ev.start), ev.title))));

    el("article")
        .class("card")
        .attr("data-team", team.name.as_str())
        .child(el("h3").class("font-semibold").text(team.name.as_str()))
        .child(el("div").class("mt-2 flex flex-wrap gap-2").children(members))
        .child(
            el("div")
                .class("mt-4 text-sm")
                .child(el("h4").class("font-semibold").text(t(state.locale, "team.joint")))
                .child(el("ul").class("list-disc pl-6").children(events)),
        )
        .into()
}
