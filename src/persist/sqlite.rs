//! SQLite-backed roster snapshot cache.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};

use crate::roster::Member;

use super::{PersistError, PersistResult, RosterSource};

const ROSTER_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemberEnvelope {
    format_version: u16,
    member: Member,
}

/// Local roster snapshot, one row per member, replaced wholesale on save.
///
/// Rows carry the membership number and call as indexed columns plus the
/// full member as a versioned JSON payload.
pub struct SqliteRosterCache {
    conn: Connection,
}

impl SqliteRosterCache {
    /// Opens or creates a cache at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory cache.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Replaces the cached snapshot with `members` and stamps the save time.
    pub fn save_roster(&mut self, members: &[Member]) -> PersistResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM members", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO members(number, call, payload) VALUES (?1, ?2, ?3)")?;
            for member in members {
                let payload = serde_json::to_vec(&MemberEnvelope {
                    format_version: ROSTER_FORMAT_VERSION,
                    member: member.clone(),
                })?;
                stmt.execute(params![
                    i64::from(member.number),
                    member.call,
                    payload
                ])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO roster_meta(key, value) VALUES ('saved_at_ms', ?1)",
            params![now_ms().to_string()],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Loads the cached snapshot, empty when nothing was ever saved.
    pub fn load_roster(&self) -> PersistResult<Vec<Member>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM members ORDER BY number ASC")?;

        let rows = stmt.query_map([], |row| {
            let payload: Vec<u8> = row.get(0)?;
            Ok(payload)
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(decode_member_payload(&row?)?);
        }
        Ok(out)
    }

    /// Milliseconds-since-epoch of the last save, when one exists.
    pub fn saved_at_ms(&self) -> PersistResult<Option<u64>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM roster_meta WHERE key = 'saved_at_ms'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let Some(value) = value else {
            return Ok(None);
        };
        value
            .parse::<u64>()
            .map(Some)
            .map_err(|e| PersistError::Message(format!("bad saved_at_ms value: {e}")))
    }
}

impl RosterSource for SqliteRosterCache {
    fn fetch(&mut self) -> PersistResult<Vec<Member>> {
        self.load_roster()
    }
}

fn decode_member_payload(payload: &[u8]) -> PersistResult<Member> {
    let envelope: MemberEnvelope = serde_json::from_slice(payload)?;
    if envelope.format_version != ROSTER_FORMAT_VERSION {
        return Err(PersistError::Message(format!(
            "unsupported roster format version: {}",
            envelope.format_version
        )));
    }
    Ok(envelope.member)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
