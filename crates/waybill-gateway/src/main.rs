mod cli;

use crate::cli::{CounterBackendArg, CLI};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use waybill_counter::{MemoryCounterStore, RedisCounterStore};
use waybill_gateway::{App, AppState};
use waybill_generator::{OsEntropy, TrackingNumberGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        counter_backend = %config.counter,
        counter_key = %config.counter_key,
        "starting waybill gateway"
    );

    let state = match config.counter {
        CounterBackendArg::InMemory => {
            AppState::new(Arc::new(TrackingNumberGenerator::with_counter_key(
                MemoryCounterStore::new(),
                OsEntropy,
                config.counter_key,
            )))
        }
        CounterBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .ok_or("redis url is required when counter backend is redis")?;
            let store = RedisCounterStore::connect(
                &redis_url,
                Duration::from_millis(config.redis_timeout_ms),
            )
            .await?;
            AppState::new(Arc::new(TrackingNumberGenerator::with_counter_key(
                store,
                OsEntropy,
                config.counter_key,
            )))
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
