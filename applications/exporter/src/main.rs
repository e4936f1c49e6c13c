/// Chorus Exporter - export pipeline consumer
///
/// Long-running worker on its own concurrency domain: pulls export
/// messages off the delivery queue one at a time, fetches the playlist
/// snapshot through the same cache gateway the server uses, and hands it
/// to the SMTP dispatcher. Per-message failures are terminal; only the
/// channel itself going away makes the loop back off.
mod config;
mod mailer;

use chorus_cache::RedisCache;
use chorus_service::{
    DeliveryQueue, ExportListener, PlaylistCacheGateway, RedisQueue, EXPORT_TOPIC,
};
use chorus_storage::PgStore;
use config::ExporterConfig;
use mailer::SmtpMailer;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chorus_exporter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ExporterConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Chorus Exporter");

    // Read-only database access; the server owns migrations
    let pool = chorus_storage::create_pool(&config.database.url).await?;
    let store = Arc::new(PgStore::new(pool));
    tracing::info!("Database connected");

    let cache = Arc::new(RedisCache::connect(&config.redis.url).await?);
    let queue = RedisQueue::connect(&config.redis.url).await?;
    tracing::info!("Redis connected");

    let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);
    let gateway = PlaylistCacheGateway::new(store, cache);
    let listener = ExportListener::new(gateway, mailer);

    tracing::info!("Consuming {}", EXPORT_TOPIC);
    run(&queue, &listener).await
}

async fn run(
    queue: &RedisQueue,
    listener: &ExportListener<PgStore, RedisCache, SmtpMailer>,
) -> anyhow::Result<()> {
    loop {
        match queue.receive(EXPORT_TOPIC).await {
            Ok(Some(raw)) => listener.on_message(&raw).await,
            // Wait window elapsed with nothing queued; poll again
            Ok(None) => {}
            Err(e) => {
                tracing::error!("delivery channel receive failed: {e}");
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }
}
