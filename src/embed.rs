//! Live player embeds.
//!
//! A fixed dispatch table maps a platform name to the live-status field it needs
//! and the player URL built from it. Identifiers are restricted to a conservative
//! charset before they are placed in a URL; anything unrecognized renders the
//! placeholder instead of a half-built iframe.

use crate::i18n::{self, Locale};
use crate::markup::{el, encode_component, Node};
use crate::model::creator::LiveStatus;

const MAX_ID_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdField {
    VideoId,
    Channel,
}

struct PlatformEmbed {
    platform: &'static str,
    field: IdField,
    build: fn(id: &str, parent: &str) -> String,
    allow_autoplay: bool,
}

const EMBEDS: &[PlatformEmbed] = &[
    PlatformEmbed {
        platform: "Youtube",
        field: IdField::VideoId,
        build: |id, _| format!("https://www.youtube.com/embed/{}", id),
        allow_autoplay: true,
    },
    PlatformEmbed {
        platform: "Twitch",
        field: IdField::Channel,
        build: |id, parent| {
            format!("https://player.twitch.tv/?channel={}&parent={}&muted=true", id, encode_component(parent))
        },
        allow_autoplay: false,
    },
    PlatformEmbed {
        platform: "CHZZK",
        field: IdField::Channel,
        build: |id, _| format!("https://chzzk.naver.com/live/{}", id),
        allow_autoplay: false,
    },
    PlatformEmbed {
        platform: "SOOP",
        field: IdField::Channel,
        build: |id, _| format!("https://sooplive.co.kr/{}", id),
        allow_autoplay: false,
    },
];

/// Platforms with a known embed, in filter order.
pub fn supported_platforms() -> impl Iterator<Item = &'static str> {
    EMBEDS.iter().map(|e| e.platform)
}

/// Resolve the player URL for a live status, if the platform/field combination is known
/// and the identifier is safe.
pub fn embed_url(status: &LiveStatus, parent: &str) -> Option<String> {
    let platform = status.platform.as_deref()?;
    let entry = EMBEDS.iter().find(|e| e.platform == platform)?;
    let id = match entry.field {
        IdField::VideoId => status.video_id.as_deref(),
        IdField::Channel => status.channel.as_deref(),
    }?;
    is_safe_id(id).then(|| (entry.build)(id, parent))
}

/// Player markup for a live status, or the placeholder.
pub fn embed_player(status: &LiveStatus, parent: &str, locale: Locale) -> Node {
    let Some(url) = embed_url(status, parent) else {
        return placeholder(locale);
    };
    let autoplay = status
        .platform
        .as_deref()
        .and_then(|p| EMBEDS.iter().find(|e| e.platform == p))
        .is_some_and(|e| e.allow_autoplay);
    youtube_like_iframe(&url, autoplay)
}

/// Representative videos on creator profiles are always YouTube ids.
pub fn representative_video(video_id: &str) -> Option<Node> {
    is_safe_id(video_id).then(|| youtube_like_iframe(&format!("https://www.youtube.com/embed/{}", video_id), true))
}

pub fn placeholder(locale: Locale) -> Node {
    el("div")
        .class("w-full h-full grid place-items-center text-gray-500 text-sm")
        .attr("data-embed", "unavailable")
        .text(i18n::t(locale, "embed.unavailable"))
        .into()
}

fn youtube_like_iframe(url: &str, autoplay: bool) -> Node {
    let mut frame = el("iframe").class("w-full h-full").src(url).attr("frameborder", "0");
    if autoplay {
        frame = frame.attr("allow", "autoplay; encrypted-media");
    }
    frame.attr("allowfullscreen", "").into()
}

fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
