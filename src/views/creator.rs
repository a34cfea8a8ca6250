use crate::embed;
use crate::i18n::t;
use crate::markup::{el, empty, Node};
use crate::state::AppState;
use crate::views::live::platform_badges;

/// Creator profile. Ids compare as strings; an unknown id renders the not-found notice.
pub fn view(state: &AppState, id: &str) -> Node {
    let l = state.locale;
    let Some(c) = state.find_creator(id) else {
        return el("p")
            .class("text-gray-600")
            .attr("data-state", "not-found")
            .text(t(l, "creator.notFound"))
            .into();
    };

    let video = c
        .representative_video
        .as_deref()
        .filter(|v| !v.is_empty())
        .and_then(embed::representative_video)
        .map(|frame| Node::from(el("div").class("aspect-video rounded-xl overflow-hidden bg-gray-100").child(frame)))
        .unwrap_or_else(empty);

    let contact = c.contact.as_deref().unwrap_or_default();
    el("section")
        .class("space-y-4")
        .attr("data-creator-id", c.id.as_str())
        .child(
            el("div")
                .class("flex items-center gap-4")
                .child(
                    el("img")
                        .src(c.thumbnail.as_deref().unwrap_or_default())
                        .class("w-20 h-20 rounded-full")
                        .attr("alt", c.name.as_str()),
                )
                .child(
                    el("div")
                        .child(el("h2").class("text-xl font-semibold").text(c.name.as_str()))
                        .child(el("p").class("text-gray-700").text(c.bio.clone().unwrap_or_default()))
                        .child(el("div").class("mt-2 flex flex-wrap gap-2").child(platform_badges(c))),
                ),
        )
        .child(video)
        .child(
            el("div")
                .child(el("h3").class("font-semibold").text(t(l, "creator.contact")))
                .child(
                    el("p").class("text-sm").text(t(l, "creator.mail")).child(
                        el("a")
                            .class("underline")
                            .href(&format!("mailto:{}", contact))
                            .text(if contact.is_empty() { "-" } else { contact }),
                    ),
                ),
        )
        .into()
}
