use crate::i18n::t;
use crate::markup::{el, Node};
use crate::state::AppState;
use crate::views::ViewContext;

pub fn view(state: &AppState, ctx: &ViewContext) -> Node {
    el("section")
        .class("space-y-4")
        .child(el("h2").class("text-xl font-semibold").text(t(state.locale, "notices.title")))
        .child(el("div").class("space-y-4").children(state.notices.iter().map(|n| -> Node {
            el("article")
                .class("card")
                .child(el("h3").class("font-semibold").text(n.title.as_str()))
                .child(
                    el("p")
                        .class("text-sm text-gray-600")
                        .text(n.date.as_deref().map(|d| ctx.fmt_date(d)).unwrap_or_default()),
                )
                .child(el("p").class("mt-2").text(n.body.clone().unwrap_or_default()))
                .into()
        })))
        .into()
}
