use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tenday_backend::config::Config;
use tenday_backend::db::create_pool;
use tenday_backend::init_tracing;
use tenday_backend::services::CyclesService;
use tenday_backend::store::PgStore;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };
    init_tracing(&config);

    let pool = match create_pool(&config.database()) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database pool");
            std::process::exit(1);
        }
    };
    let store = Arc::new(PgStore::new(pool));

    let period = Duration::from_secs(config.worker().status_refresh_interval_secs);
    tracing::info!(interval_secs = period.as_secs(), "Status refresh worker started");

    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Status refresh worker stopping");
                break;
            }
        }

        let store = Arc::clone(&store);
        let today = Local::now().date_naive();
        let result = tokio::task::spawn_blocking(move || {
            CyclesService::refresh_statuses(store.as_ref(), None, today)
        })
        .await;

        match result {
            Ok(Ok(changed)) => tracing::info!(changed = changed.len(), %today, "Cycle statuses refreshed"),
            Ok(Err(e)) => tracing::warn!(error = %e, "Cycle status refresh failed"),
            Err(e) => tracing::error!(error = %e, "Cycle status refresh task panicked"),
        }
    }
}
