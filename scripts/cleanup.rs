//! Run with: cargo run --bin cleanup
//!
//! Empties the trips collection without inserting the sample trip.

use tripseed::config::{credentials::Credentials, database};
use tripseed::modules::trip::crud::{TripCrud, COLLECTION_NAME};
use tripseed::services::setup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let credentials = Credentials::load_default()?;

    println!("Connecting to {}...", credentials.database);
    let client = database::connect(&credentials).await?;
    let store = TripCrud::new(client, &credentials.database);

    let outcome = setup::clear_trips_collection(&store).await?;
    println!("✓ Removed {} documents from {}", outcome.deleted_count(), COLLECTION_NAME);

    let remaining = store.count().await?;
    println!("  {} documents remaining", remaining);

    println!("\n✓ Cleanup complete!");
    Ok(())
}
