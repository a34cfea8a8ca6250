mod common;

use std::sync::Arc;

use common::FixtureFetcher;
use creator_hub_lambda_rust::cache::CacheWorker;
use creator_hub_lambda_rust::loader::Loader;
use creator_hub_lambda_rust::model::creator::Creator;
use creator_hub_lambda_rust::model::schedule::ScheduleEvent;
use creator_hub_lambda_rust::model::site::FeatureFlags;
use creator_hub_lambda_rust::state::{self, bootstrap};

#[test]
fn load_resource_decodes_json() {
    let loader = Loader::new(common::origin(), FixtureFetcher::new());
    let creators: Vec<Creator> = loader.load_resource(state::CREATORS_PATH, Vec::new());
    assert_eq!(creators.len(), 4);
    assert_eq!(creators[2].id, "3");
}

#[test]
fn load_resource_returns_fallback_on_missing_file() {
    let loader = Loader::new(common::origin(), FixtureFetcher::new());
    let value: Vec<Creator> = loader.load_resource("data/missing.json", Vec::new());
    assert!(value.is_empty());
}

#[test]
fn load_resource_returns_fallback_on_network_failure() {
    let fetcher = FixtureFetcher::new();
    fetcher.set_online(false);
    let loader = Loader::new(common::origin(), fetcher);
    let flags = loader.load_resource(state::FEATURE_FLAGS_PATH, FeatureFlags::default());
    assert!(flags.0.is_empty());
}

#[test]
fn load_resource_returns_fallback_on_malformed_json() {
    let loader = Loader::new(common::origin(), FixtureFetcher::new());
    // A JSON object where an array is expected.
    let value: Vec<Creator> = loader.load_resource(state::SUPPORT_PATH, Vec::new());
    assert!(value.is_empty());
}

#[test]
fn one_incomplete_record_does_not_drop_the_rest() {
    let loader = Loader::new(common::origin(), FixtureFetcher::new());
    let creators: Vec<Creator> = loader.load_resource("data/creators_partial.json", Vec::new());
    let ids: Vec<&str> = creators.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c1", "c2", "7"]);
    assert_eq!(creators[0].name, "Alice");
    assert!(creators[0].platform_links.is_empty());
    assert_eq!(creators[1].name, "");
    assert_eq!(creators[2].platform_links[0].type_field, "Twitch");
    assert_eq!(creators[2].platform_links[0].url, "");
}

#[test]
fn null_lists_and_missing_titles_decode_to_empty() {
    let loader = Loader::new(common::origin(), FixtureFetcher::new());
    let schedule: Vec<ScheduleEvent> = loader.load_resource("data/schedule_partial.json", Vec::new());
    assert_eq!(schedule.len(), 3);
    assert!(schedule[0].participants.is_empty());
    assert_eq!(schedule[1].title, "");
    assert_eq!(schedule[1].participants, ["c1"]);
    assert!(schedule[2].start_at().is_none());
}

#[tokio::test]
async fn bootstrap_populates_every_section() {
    let loader = Arc::new(Loader::new(common::origin(), FixtureFetcher::new()));
    let app = bootstrap(loader).await;

    assert!(!app.demo, "config.json disables demo mode");
    assert!(app.feature_flags.enabled("liveBanner"));
    assert!(!app.feature_flags.enabled("merch"));
    assert!(app.site.extra.contains_key("youtubeApiKey"));
    assert_eq!(app.creators.len(), 4);
    assert_eq!(app.schedule.len(), 6);
    assert_eq!(app.vods.len(), 7);
    assert_eq!(app.teams.len(), 2);
    assert_eq!(app.support.links.len(), 2);
    assert_eq!(app.support.merch.len(), 2);
    assert_eq!(app.notices.len(), 6);
}

#[tokio::test]
async fn bootstrap_offline_degrades_to_fallbacks() {
    let fetcher = FixtureFetcher::new();
    fetcher.set_online(false);
    let app = bootstrap(Arc::new(Loader::new(common::origin(), fetcher))).await;

    assert!(app.demo, "fallback config keeps demo mode on");
    assert!(app.creators.is_empty());
    assert!(app.schedule.is_empty());
    assert!(app.support.links.is_empty());
    assert!(app.notices.is_empty());
}

#[tokio::test]
async fn bootstrap_through_cache_survives_going_offline() {
    let network = Arc::new(FixtureFetcher::new());
    let manifest = [
        "/config.json",
        "/data/feature_flags.json",
        "/data/creators.json",
        "/data/schedule.json",
        "/data/vods.json",
        "/data/teams.json",
        "/data/support.json",
        "/data/notices.json",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let worker = Arc::new(CacheWorker::with_manifest("creatorhub-test", common::origin(), Arc::clone(&network), manifest));
    worker.install().unwrap();
    worker.activate().unwrap();
    network.set_online(false);

    let app = bootstrap(Arc::new(Loader::new(common::origin(), worker))).await;
    assert_eq!(app.creators.len(), 4);
    assert_eq!(app.vods.len(), 7);
}
