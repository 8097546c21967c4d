#![allow(dead_code)]

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson};
use chrono::Utc;
use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use tripseed::modules::trip::{crud::TripStore, model::Trip};
use tripseed::SetupError;

#[derive(Default)]
struct State {
    docs: BTreeMap<ObjectId, Trip>,
    commits: Vec<Vec<Bson>>,
    insert_calls: usize,
}

/// In-memory trips collection with failure injection.
#[derive(Default)]
pub struct FakeStore {
    state: Mutex<State>,
    pub fail_commit: bool,
    pub fail_insert: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trips(count: usize) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().unwrap();
            for _ in 0..count {
                let id = ObjectId::new();
                let mut trip = Trip::sample(Utc::now());
                trip.id = Some(id);
                state.docs.insert(id, trip);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().docs.len()
    }

    pub fn ids(&self) -> Vec<Bson> {
        self.state.lock().unwrap().docs.keys().map(|id| Bson::ObjectId(*id)).collect()
    }

    pub fn trips(&self) -> Vec<Trip> {
        self.state.lock().unwrap().docs.values().cloned().collect()
    }

    pub fn commits(&self) -> Vec<Vec<Bson>> {
        self.state.lock().unwrap().commits.clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().unwrap().insert_calls
    }
}

#[async_trait]
impl TripStore for FakeStore {
    async fn list_documents(&self) -> Result<Vec<Bson>, SetupError> {
        Ok(self.ids())
    }

    async fn batch_delete(&self, ids: &[Bson]) -> Result<(), SetupError> {
        if self.fail_commit {
            return Err(SetupError::Backend("batch commit rejected".to_string()));
        }

        let mut state = self.state.lock().unwrap();
        for id in ids {
            if let Some(oid) = id.as_object_id() {
                state.docs.remove(&oid);
            }
        }
        state.commits.push(ids.to_vec());

        Ok(())
    }

    async fn insert_document(&self, trip: &Trip) -> Result<ObjectId, SetupError> {
        let mut state = self.state.lock().unwrap();
        state.insert_calls += 1;

        if self.fail_insert {
            return Err(SetupError::Backend("insert rejected".to_string()));
        }

        let id = ObjectId::new();
        let now = bson::DateTime::now();
        let mut stored = trip.clone();
        stored.id = Some(id);
        stored.created_at = Some(now);
        stored.updated_at = Some(now);
        state.docs.insert(id, stored);

        Ok(id)
    }
}

/// Captures formatted `tracing` output for the current thread.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
