//! Application state and its startup sequence.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::fetch::Fetch;
use crate::i18n::Locale;
use crate::loader::{load_blocking, Loader};
use crate::model::creator::Creator;
use crate::model::notice::Notice;
use crate::model::schedule::ScheduleEvent;
use crate::model::site::{FeatureFlags, SiteConfig};
use crate::model::support::SupportConfig;
use crate::model::team::Team;
use crate::model::vod::Vod;

pub const CONFIG_PATH: &str = "config.json";
pub const FEATURE_FLAGS_PATH: &str = "data/feature_flags.json";
pub const CREATORS_PATH: &str = "data/creators.json";
pub const SCHEDULE_PATH: &str = "data/schedule.json";
pub const VODS_PATH: &str = "data/vods.json";
pub const TEAMS_PATH: &str = "data/teams.json";
pub const SUPPORT_PATH: &str = "data/support.json";
pub const NOTICES_PATH: &str = "data/notices.json";

/// Everything the views read. Built once per process and passed by reference.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub site: SiteConfig,
    pub feature_flags: FeatureFlags,
    pub creators: Vec<Creator>,
    pub schedule: Vec<ScheduleEvent>,
    pub vods: Vec<Vod>,
    pub teams: Vec<Team>,
    pub support: SupportConfig,
    pub notices: Vec<Notice>,
    pub locale: Locale,
    pub demo: bool,
}

impl AppState {
    pub fn find_creator(&self, id: &str) -> Option<&Creator> {
        self.creators.iter().find(|c| c.id == id)
    }

    pub fn live_creators(&self) -> impl Iterator<Item = &Creator> {
        self.creators.iter().filter(|c| c.is_live())
    }
}

/// Load all data. Site config and feature flags come first; the six content
/// files are then loaded concurrently and joined. Each load settles on its own:
/// a failure resolves to that resource's empty fallback without affecting the others.
/// The locale stays at its default until the hub applies the saved preference.
#[instrument(level = "info", skip(loader), fields(base = %loader.base()))]
pub async fn bootstrap<F: Fetch + 'static>(loader: Arc<Loader<F>>) -> AppState {
    let site: SiteConfig = load_blocking(&loader, CONFIG_PATH, SiteConfig::default()).await;
    let demo = site.demo_mode;
    let feature_flags: FeatureFlags = load_blocking(&loader, FEATURE_FLAGS_PATH, FeatureFlags::default()).await;

    let (creators, schedule, vods, teams, support, notices) = tokio::join!(
        load_blocking(&loader, CREATORS_PATH, Vec::<Creator>::new()),
        load_blocking(&loader, SCHEDULE_PATH, Vec::<ScheduleEvent>::new()),
        load_blocking(&loader, VODS_PATH, Vec::<Vod>::new()),
        load_blocking(&loader, TEAMS_PATH, Vec::<Team>::new()),
        load_blocking(&loader, SUPPORT_PATH, SupportConfig::default()),
        load_blocking(&loader, NOTICES_PATH, Vec::<Notice>::new()),
    );

    info!(
        creators = creators.len(),
        schedule = schedule.len(),
        vods = vods.len(),
        teams = teams.len(),
        notices = notices.len(),
        demo,
        "Application state loaded"
    );

    AppState { site, feature_flags, creators, schedule, vods, teams, support, notices, locale: Locale::default(), demo }
}
