use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Client, Collection};

use crate::errors::SetupError;
use crate::modules::trip::model::Trip;

pub const COLLECTION_NAME: &str = "trips";

/// Remote operations the setup procedure needs from the trips collection.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Ids of every document currently in the collection.
    async fn list_documents(&self) -> Result<Vec<Bson>, SetupError>;

    /// Deletes all `ids` in a single atomic commit.
    async fn batch_delete(&self, ids: &[Bson]) -> Result<(), SetupError>;

    /// Inserts `trip` under a freshly generated id. `createdAt` and
    /// `updatedAt` are assigned by the database.
    async fn insert_document(&self, trip: &Trip) -> Result<ObjectId, SetupError>;
}

pub fn id_projection() -> Document {
    doc! { "_id": 1 }
}

pub fn delete_filter(ids: &[Bson]) -> Document {
    doc! { "_id": { "$in": ids.to_vec() } }
}

/// Upsert body for a new trip. Any id or timestamps already on `trip` are
/// ignored; the server sets both timestamps.
pub fn insert_update(trip: &Trip) -> Result<Document, SetupError> {
    let mut fields = bson::to_document(trip)?;
    fields.remove("_id");
    fields.remove("createdAt");
    fields.remove("updatedAt");

    Ok(doc! {
        "$set": fields,
        "$currentDate": { "createdAt": true, "updatedAt": true }
    })
}

pub struct TripCrud {
    client: Client,
    collection: Collection<Document>,
}

impl TripCrud {
    pub fn new(client: Client, database: &str) -> Self {
        let collection = client.database(database).collection(COLLECTION_NAME);
        Self { client, collection }
    }

    pub async fn count(&self) -> Result<u64, SetupError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

#[async_trait]
impl TripStore for TripCrud {
    async fn list_documents(&self) -> Result<Vec<Bson>, SetupError> {
        let cursor = self
            .collection
            .find(doc! {})
            .projection(id_projection())
            .await?;

        let docs: Vec<Document> = cursor.try_collect().await?;

        Ok(docs
            .into_iter()
            .filter_map(|mut d| d.remove("_id"))
            .collect())
    }

    async fn batch_delete(&self, ids: &[Bson]) -> Result<(), SetupError> {
        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        // Dropping the session on error aborts the transaction
        self.collection
            .delete_many(delete_filter(ids))
            .session(&mut session)
            .await?;

        session.commit_transaction().await?;

        Ok(())
    }

    async fn insert_document(&self, trip: &Trip) -> Result<ObjectId, SetupError> {
        let id = ObjectId::new();

        self.collection
            .update_one(doc! { "_id": id }, insert_update(trip)?)
            .upsert(true)
            .await?;

        Ok(id)
    }
}
