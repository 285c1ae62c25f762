//! Mock data seeder entry point
//!
//! Run with:
//! ```bash
//! cargo run -p party-service --bin party-seed
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use party_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use party_service::{seed_mock_data, AppContext};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing();
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::from(&config.logging)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        "Configuration loaded"
    );

    let ctx = AppContext::from_config(&config);
    if !config.data.seed_mock_data {
        info!("SEED_MOCK_DATA is off, nothing to do");
        return Ok(());
    }

    let report = seed_mock_data(&ctx).await?;
    let stats = ctx.backend().stats();
    info!(
        live_party = %report.live_party_id,
        room = %report.room_id,
        users = stats.users,
        parties = stats.parties,
        media = stats.media,
        messages = stats.messages,
        follows = stats.follows,
        "Backend ready"
    );

    Ok(())
}
