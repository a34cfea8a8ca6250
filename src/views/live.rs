use serde::{Deserialize, Serialize};

use crate::embed;
use crate::i18n::t;
use crate::markup::{el, encode_component, fragment, Element, Node};
use crate::model::creator::Creator;
use crate::state::AppState;
use crate::views::ViewContext;

/// Platform select of the live hub. Anything outside the known list means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum PlatformFilter {
    #[default]
    All,
    Only(String),
}

impl PlatformFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if embed::supported_platforms().any(|p| p == v) => PlatformFilter::Only(v.to_string()),
            _ => PlatformFilter::All,
        }
    }

    pub fn accepts(&self, creator: &Creator) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(p) => creator
                .live_status
                .as_ref()
                .and_then(|ls| ls.platform.as_deref())
                .is_some_and(|cp| cp == p),
        }
    }

    fn selected(&self) -> &str {
        match self {
            PlatformFilter::All => "",
            PlatformFilter::Only(p) => p,
        }
    }
}

impl From<Option<String>> for PlatformFilter {
    fn from(value: Option<String>) -> Self {
        PlatformFilter::parse(value.as_deref())
    }
}

impl From<PlatformFilter> for Option<String> {
    fn from(value: PlatformFilter) -> Self {
        match value {
            PlatformFilter::All => None,
            PlatformFilter::Only(p) => Some(p),
        }
    }
}

/// Split creators into (live, offline), keeping source order in both.
pub fn partition(creators: &[Creator]) -> (Vec<&Creator>, Vec<&Creator>) {
    creators.iter().partition(|c| c.is_live())
}

/// Live creators passing the platform filter.
pub fn filtered_live<'a>(creators: &'a [Creator], filter: &PlatformFilter) -> Vec<&'a Creator> {
    partition(creators).0.into_iter().filter(|c| filter.accepts(c)).collect()
}

pub fn view(state: &AppState, ctx: &ViewContext, filter: &PlatformFilter) -> Node {
    let l = state.locale;
    let (_, offline) = partition(&state.creators);
    let live = filtered_live(&state.creators, filter);

    let grid = if live.is_empty() {
        el("div")
            .class("grid-cards")
            .id("live-grid")
            .child(el("p").class("text-gray-600").text(t(l, "live.none")))
    } else {
        el("div")
            .class("grid-cards")
            .id("live-grid")
            .children(live.into_iter().map(|c| live_card(c, state, ctx)))
    };

    el("section")
        .class("space-y-4")
        .child(
            el("div")
                .class("flex items-center justify-between")
                .child(el("h2").class("text-xl font-semibold").text(t(l, "live.onAir")))
                .child(
                    el("div")
                        .class("text-sm text-gray-600")
                        .text(t(l, "live.filter"))
                        .text(" ")
                        .child(platform_select(filter, state)),
                ),
        )
        .child(grid)
        .child(el("h3").class("text-lg font-semibold mt-6").text(t(l, "live.offline")))
        .child(el("div").class("grid-cards").children(offline.into_iter().map(creator_card)))
        .into()
}

fn platform_select(filter: &PlatformFilter, state: &AppState) -> Element {
    let selected = filter.selected();
    let all = option("", &t(state.locale, "live.all"), selected.is_empty());
    let platforms = embed::supported_platforms().map(|p| option(p, p, p == selected));
    el("select")
        .id("platform-filter")
        .class("border rounded px-2 py-1")
        .attr("name", "platform")
        .children(std::iter::once(all).chain(platforms))
}

fn option(value: &str, label: &str, selected: bool) -> Node {
    let opt = el("option").attr("value", value);
    let opt = if selected { opt.attr("selected", "") } else { opt };
    opt.text(label).into()
}

fn creator_link(c: &Creator) -> Element {
    el("h3")
        .class("font-semibold")
        .child(
            el("a")
                .class("hover:underline")
                .href(&format!("#/creator/{}", encode_component(&c.id)))
                .text(c.name.as_str()),
        )
}

fn avatar(c: &Creator) -> Element {
    el("img")
        .src(c.thumbnail.as_deref().unwrap_or_default())
        .class("w-10 h-10 rounded-full")
        .attr("alt", c.name.as_str())
}

fn live_card(c: &Creator, state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    let status = c.live_status.clone().unwrap_or_default();
    let title = status.title.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| t(l, "live.defaultTitle"));
    let badge = format!(
        "{} • {}{}",
        status.platform.as_deref().unwrap_or_default(),
        status.viewers.as_deref().unwrap_or("0"),
        t(l, "live.viewers")
    );

    el("article")
        .class("card")
        .attr("data-creator-id", c.id.as_str())
        .child(
            el("div")
                .class("flex items-center justify-between")
                .child(
                    el("div")
                        .class("flex items-center gap-3")
                        .child(avatar(c))
                        .child(el("div").child(creator_link(c)).child(el("p").class("text-sm text-gray-600").text(title))),
                )
                .child(el("span").class("badge ring-red-200 bg-red-50 text-red-700").text(badge)),
        )
        .child(
            el("div")
                .class("mt-3 aspect-video rounded-xl overflow-hidden bg-gray-100")
                .child(embed::embed_player(&status, &ctx.embed_parent, l)),
        )
        .into()
}

pub(crate) fn platform_badges(c: &Creator) -> Node {
    fragment(c.platform_links.iter().map(|pl| -> Node {
        el("a")
            .class("badge ring-gray-200 bg-gray-50")
            .attr("target", "_blank")
            .href(&pl.url)
            .text(pl.type_field.as_str())
            .into()
    }))
}

fn creator_card(c: &Creator) -> Node {
    el("article")
        .class("card")
        .attr("data-creator-id", c.id.as_str())
        .child(
            el("div")
                .class("flex items-center gap-3")
                .child(avatar(c))
                .child(
                    el("div")
                        .child(creator_link(c))
                        .child(el("p").class("text-sm text-gray-600").text(c.bio.clone().unwrap_or_default())),
                ),
        )
        .child(el("div").class("mt-3 flex items-center gap-2").child(platform_badges(c)))
        .into()
}
