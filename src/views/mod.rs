//! Per-route projections of [`AppState`] into markup.
//!
//! Each view is a function of the state, the render context and the route's
//! parameters. The data selection each view performs lives in a plain function
//! next to it so it can be checked without looking at markup.

pub mod admin;
pub mod creator;
pub mod home;
pub mod live;
pub mod notices;
pub mod schedule;
pub mod shell;
pub mod support;
pub mod team;
pub mod vod;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::DEFAULT_DISPLAY_TZ;
use crate::markup::Node;
use crate::model::parse_timestamp;
use crate::prefs::Theme;
use crate::router::Route;
use crate::state::AppState;

/// Ambient inputs of a render.
#[derive(Debug, Clone)]
pub struct ViewContext {
    /// Evaluation instant for "upcoming" decisions.
    pub now: DateTime<Utc>,
    pub tz: Tz,
    pub theme: Theme,
    /// Host given to embeds that require a parent domain.
    pub embed_parent: String,
}

impl ViewContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now, tz: DEFAULT_DISPLAY_TZ, theme: Theme::default(), embed_parent: "localhost".to_string() }
    }

    /// `YYYY-MM-DD HH:MM` in the display timezone; unparseable input is returned as is.
    pub fn fmt_date(&self, raw: &str) -> String {
        match parse_timestamp(raw) {
            Some(dt) => dt.with_timezone(&self.tz).format("%Y-%m-%d %H:%M").to_string(),
            None => raw.to_string(),
        }
    }

    pub fn tz_label(&self) -> String {
        self.now.with_timezone(&self.tz).format("%Z").to_string()
    }
}

/// In-view inputs. They belong to a single render and are never carried over.
#[derive(Debug, Clone, Default)]
pub struct ViewInputs {
    /// VOD search box.
    pub search: String,
    /// Live hub platform select.
    pub platform: live::PlatformFilter,
}

/// Dispatch table: one view per route.
pub fn render(route: &Route, state: &AppState, ctx: &ViewContext, inputs: &ViewInputs) -> Node {
    match route {
        Route::Home => home::view(state, ctx),
        Route::Live => live::view(state, ctx, &inputs.platform),
        Route::Schedule => schedule::view(state, ctx),
        Route::Vod => vod::view(state, ctx, &inputs.search),
        Route::Team => team::view(state, ctx),
        Route::Support { tab } => support::view(state, ctx, *tab),
        Route::Notices => notices::view(state, ctx),
        Route::Creator { id } => creator::view(state, id),
        Route::Admin => admin::admin_view(state),
        Route::Privacy => admin::privacy_view(state),
    }
}
