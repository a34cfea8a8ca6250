use std::sync::Arc;

use creator_hub_lambda_rust::cache::CacheWorker;
use creator_hub_lambda_rust::config::HubConfig;
use creator_hub_lambda_rust::fetch::HttpFetcher;
use creator_hub_lambda_rust::handler::{handler, Hub};
use creator_hub_lambda_rust::loader::Loader;
use creator_hub_lambda_rust::prefs::PreferenceStore;
use creator_hub_lambda_rust::state;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    let config = HubConfig::from_env();
    info!(base = %config.base_url, tz = %config.display_tz, cache = %config.cache_name, "Starting creator hub");

    // Install and activate the offline cache before the first data load so the
    // loads below are already served through it.
    let worker = Arc::new(CacheWorker::new(config.cache_name.clone(), config.base_url.clone(), HttpFetcher::new()));
    let install_worker = Arc::clone(&worker);
    let installed = tokio::task::spawn_blocking(move || install_worker.install().and_then(|_| install_worker.activate())).await?;
    if let Err(e) = installed {
        warn!(error = %e, "Offline cache unavailable; requests go to the network");
    }

    let loader = Arc::new(Loader::new(config.base_url.clone(), worker));
    let prefs = PreferenceStore::load(config.prefs_path.clone());
    let app_state = state::bootstrap(loader).await;
    let hub = Arc::new(Hub::new(config, app_state, prefs));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<_>| handler(Arc::clone(&hub), event))).await
}
