use crate::i18n::t;
use crate::markup::{el, Node};
use crate::router::SupportTab;
use crate::state::AppState;
use crate::views::ViewContext;

pub fn view(state: &AppState, ctx: &ViewContext, tab: SupportTab) -> Node {
    let l = state.locale;
    let tab_link = |target: SupportTab, key: &str| -> Node {
        let class = if tab == target { "py-2 border-b-2 border-indigo-600" } else { "py-2" };
        el("a")
            .href(&format!("#/support?tab={}", target.as_str()))
            .class(class)
            .attr("data-tab", target.as_str())
            .text(t(l, key))
            .into()
    };

    let body = match tab {
        SupportTab::Support => support_tab(state),
        SupportTab::Merch => merch_tab(state, ctx),
    };

    el("section")
        .class("space-y-4")
        .child(el("h2").class("text-xl font-semibold").text(t(l, "support.title")))
        .child(
            el("div")
                .class("flex gap-4 border-b")
                .child(tab_link(SupportTab::Support, "support.support"))
                .child(tab_link(SupportTab::Merch, "support.merch")),
        )
        .child(body)
        .into()
}

fn support_tab(state: &AppState) -> Node {
    let l = state.locale;
    el("div")
        .class("grid-cards")
        .id("support-links")
        .children(state.support.links.iter().map(|link| -> Node {
            el("article")
                .class("card")
                .child(el("h3").class("font-semibold").text(link.label.as_str()))
                .child(el("p").class("text-sm text-gray-600").text(link.desc.clone().unwrap_or_default()))
                .child(
                    el("a")
                        .attr("target", "_blank")
                        .class("underline text-indigo-600 mt-2 inline-block")
                        .href(link.url.as_deref().unwrap_or_default())
                        .text(t(l, "support.go")),
                )
                .into()
        }))
        .into()
}

fn merch_tab(state: &AppState, ctx: &ViewContext) -> Node {
    let l = state.locale;
    el("div")
        .class("grid-cards")
        .id("merch")
        .children(state.support.merch.iter().map(|m| -> Node {
            let mut info = el("div")
                .class("mt-3")
                .child(el("h3").class("font-semibold").text(m.name.as_str()))
                .child(el("p").class("text-sm text-gray-600").text(m.desc.clone().unwrap_or_default()))
                .child(
                    el("div")
                        .class("text-sm mt-1")
                        .text(format!("{}{}", t(l, "support.stock"), m.stock.as_deref().unwrap_or("-"))),
                );
            if let Some(drop_at) = m.drop_at.as_deref().filter(|d| !d.is_empty()) {
                info = info.child(
                    el("div")
                        .class("text-sm")
                        .text(format!("{}{}", t(l, "support.drop"), ctx.fmt_date(drop_at))),
                );
            }
            info = info.child(
                el("a")
                    .attr("target", "_blank")
                    .class("underline text-indigo-600 mt-2 inline-block")
                    .href(m.url.as_deref().unwrap_or_default())
                    .text(t(l, "support.buy")),
            );
            el("article")
                .class("card")
                .child(
                    el("img")
                        .class("w-full aspect-square object-cover rounded-xl")
                        .src(m.image.as_deref().unwrap_or_default())
                        .attr("alt", m.name.as_str()),
                )
                .child(info)
                .into()
        }))
        .into()
}
