//! Roster source abstraction and SQLite snapshot cache.

/// SQLite-backed roster snapshot cache.
pub mod sqlite;

use crate::roster::Member;

/// Persistence and collaborator error type.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying SQLite failure.
    Sqlite(rusqlite::Error),
    /// Payload encode/decode failure.
    Serde(serde_json::Error),
    /// Anything else, as text.
    Message(String),
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// A collaborator that produces the materialized member list.
///
/// Implementations may fail or return an empty list; the engine treats an
/// empty roster as "zero matches", never as an error. Network fetchers own
/// their retry policy elsewhere and hand over a finished list here.
pub trait RosterSource: Send {
    /// Produces the member list.
    fn fetch(&mut self) -> PersistResult<Vec<Member>>;
}
