use crate::i18n::t;
use crate::markup::{el, Node};
use crate::model::vod::Vod;
use crate::state::AppState;
use crate::views::ViewContext;

/// VODs whose title or joined tags contain `query`, case-insensitively, in source order.
/// Evaluated on every input change; no debounce.
pub fn filter_vods<'a>(vods: &'a [Vod], query: &str) -> Vec<&'a Vod> {
    vods.iter().filter(|v| v.matches(query)).collect()
}

pub fn view(state: &AppState, ctx: &ViewContext, query: &str) -> Node {
    let l = state.locale;
    el("section")
        .class("space-y-4")
        .child(
            el("div")
                .class("flex items-center justify-between")
                .child(el("h2").class("text-xl font-semibold").text(t(l, "vod.title")))
                .child(
                    el("input")
                        .id("vod-search")
                        .class("border rounded px-3 py-2 w-64")
                        .attr("name", "search")
                        .attr("value", query)
                        .attr("placeholder", t(l, "vod.search")),
                ),
        )
        .child(
            el("div")
                .class("grid-cards")
                .id("vod-grid")
                .children(filter_vods(&state.vods, query).into_iter().map(|v| vod_card(v, state, ctx, true))),
        )
        .into()
}

pub(crate) fn vod_card(v: &Vod, state: &AppState, ctx: &ViewContext, with_tags: bool) -> Node {
    let l = state.locale;
    let published = v.published_at.as_deref().map(|p| ctx.fmt_date(p)).unwrap_or_default();

    let mut body = el("div")
        .class("mt-3")
        .child(
            el("div")
                .class("flex items-center justify-between")
                .child(el("h3").class("font-semibold line-clamp-2").text(v.title.as_str()))
                .child(el("span").class("badge ring-gray-200 bg-gray-50").text(v.platform.clone().unwrap_or_default())),
        )
        .child(el("p").class("mt-1 text-sm text-gray-600").text(published));
    if with_tags {
        body = body.child(
            el("div")
                .class("mt-2 flex flex-wrap gap-2")
                .children(v.tags.iter().map(|tag| Node::from(el("span").class("badge ring-gray-200 bg-gray-50").text(tag.as_str())))),
        );
    }
    body = body.child(
        el("a")
            .class("text-sm text-indigo-600 underline mt-2 inline-block")
            .attr("target", "_blank")
            .href(v.url.as_deref().unwrap_or_default())
            .text(t(l, "vod.watch")),
    );

    el("article")
        .class("card")
        .attr("data-vod-id", v.id.clone().unwrap_or_default())
        .child(
            el("img")
                .class("w-full aspect-video object-cover rounded-xl")
                .src(v.thumbnail.as_deref().unwrap_or_default())
                .attr("alt", v.title.as_str()),
        )
        .child(body)
        .into()
}
