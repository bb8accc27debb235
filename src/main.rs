use dotenvy::dotenv;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod services;
mod models;
mod types;
mod utils;


#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing API key surfaces here as Err and the process exits 1.
    let cfg = config::AppConfig::from_env()?;
    let state = cfg.build_state()?;

    // Fetch failures and empty payloads end the run with exit 0; only
    // write failures propagate past this point.
    match services::report_service::build_report(&state).await? {
        Some(summary) => info!(
            "✅ Created {} with total GDP (PPP) for {} countries",
            summary.output_path.display(),
            summary.countries_written
        ),
        None => warn!("Could not retrieve country data. Exiting."),
    }

    Ok(())
}
