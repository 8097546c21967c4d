use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::SetupError;
use crate::modules::trip::{
    crud::TripStore,
    model::Trip,
    schema::{ResetOutcome, SetupReport},
};

/// Removes every document from the trips collection in one batch.
pub async fn clear_trips_collection<S>(store: &S) -> Result<ResetOutcome, SetupError>
where
    S: TripStore + ?Sized,
{
    let ids = store.list_documents().await?;

    info!("Deleting existing trips...");

    if ids.is_empty() {
        info!("No existing trip documents found");
        return Ok(ResetOutcome::Empty);
    }

    store.batch_delete(&ids).await?;
    info!("Deleted {} trip documents", ids.len());

    Ok(ResetOutcome::Deleted(ids.len()))
}

pub async fn setup_trips_collection<S>(store: &S, now: DateTime<Utc>) -> Result<ObjectId, SetupError>
where
    S: TripStore + ?Sized,
{
    let trip = Trip::sample(now);
    let id = store.insert_document(&trip).await?;

    info!(id = %id.to_hex(), "Created sample trip document");
    Ok(id)
}

/// Reset, then insert. The insert only runs once the reset has committed.
pub async fn run<S>(store: &S, now: DateTime<Utc>) -> Result<SetupReport, SetupError>
where
    S: TripStore + ?Sized,
{
    let reset = clear_trips_collection(store).await?;
    let trip_id = setup_trips_collection(store, now).await?;

    Ok(SetupReport { reset, trip_id })
}
