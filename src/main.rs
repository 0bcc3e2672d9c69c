use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use venture_match::config::{LoggingSettings, Settings};
use venture_match::services::{CachedProfileStore, PostgresStore};
use venture_match::{MatchingCriteria, MatchingEngine};

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn usage() -> ! {
    eprintln!("usage: venture-match <profile-id> [limit]");
    std::process::exit(2);
}

/// Print ranked matches for one profile as JSON
#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    init_logging(&settings.logging);

    let mut args = std::env::args().skip(1);
    let profile_id = args.next().unwrap_or_else(|| usage());
    let limit = match args.next() {
        Some(raw) => raw.parse::<usize>().unwrap_or_else(|_| usage()),
        None => settings.matching.default_limit,
    };

    let postgres = match PostgresStore::connect(
        &settings.database.url,
        settings.database.max_connections.unwrap_or(10),
        settings.database.min_connections.unwrap_or(1),
        settings.database.acquire_timeout_secs.unwrap_or(5),
        settings.database.idle_timeout_secs.unwrap_or(600),
    )
    .await
    {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to connect to PostgreSQL: {}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(CachedProfileStore::new(
        postgres,
        settings.cache.l1_cache_size,
        settings.cache.ttl_secs,
    ));

    info!(
        "Profile cache initialized (L1: {} entries, TTL: {}s)",
        settings.cache.l1_cache_size, settings.cache.ttl_secs
    );

    let engine = MatchingEngine::with_standard_tables(store);
    let criteria = MatchingCriteria::for_profile(profile_id);

    match engine.find_matches(&criteria, limit).await {
        Ok(matches) => match serde_json::to_string_pretty(&matches) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize matches: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to find matches for {}: {}", criteria.profile_id, e);
            std::process::exit(1);
        }
    }
}
