use anyhow::Context;
use chrono::Utc;
use tracing::{error, info};

use tripseed::config::{credentials::Credentials, database};
use tripseed::modules::trip::crud::TripCrud;
use tripseed::services::setup;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    match execute().await {
        Ok(()) => info!("Trip collection setup completed successfully"),
        Err(e) => error!("Error setting up trips collection: {:?}", e),
    }

    // Same exit status on both paths
    std::process::exit(0);
}

async fn execute() -> anyhow::Result<()> {
    let credentials = Credentials::load_default().context("loading credentials")?;
    let client = database::connect(&credentials)
        .await
        .context("connecting to database")?;

    let store = TripCrud::new(client, &credentials.database);
    setup::run(&store, Utc::now()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
