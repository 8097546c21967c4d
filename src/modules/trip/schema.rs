use bson::oid::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Deleted(usize),
    Empty,
}

impl ResetOutcome {
    pub fn deleted_count(&self) -> usize {
        match self {
            ResetOutcome::Deleted(n) => *n,
            ResetOutcome::Empty => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    pub reset: ResetOutcome,
    pub trip_id: ObjectId,
}
