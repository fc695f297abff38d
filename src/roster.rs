//! Membership roster entries and lookup index.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::call;
use crate::types::{DateNum, MemberId, Rank};

/// One club roster entry.
///
/// Supplied wholesale by a roster collaborator and never mutated by the
/// engine. `rank` is the member's *current* achievement suffix; the engine
/// evaluates tiers from the rank recorded on each QSO, not from this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Callsign as listed on the roster.
    pub call: String,
    /// Unique membership number.
    pub number: MemberId,
    /// Join date as numeric `YYYYMMDD`, when known.
    pub join_date: Option<DateNum>,
    /// Current achievement rank suffix, when any.
    pub rank: Option<Rank>,
}

/// Lookup structures built from the member list.
///
/// Alias collisions keep the first writer: a later member whose alias set
/// overlaps an earlier member's never displaces the existing mapping.
#[derive(Debug, Default)]
pub struct RosterIndex {
    by_number: HashMap<MemberId, Member>,
    by_alias: HashMap<String, MemberId>,
}

impl RosterIndex {
    /// Builds the index from a materialized member list.
    ///
    /// An empty list is valid and yields an index that matches nothing.
    pub fn build(members: Vec<Member>) -> Self {
        let mut index = Self::default();

        for member in members {
            for alias in call::aliases(&member.call) {
                index.by_alias.entry(alias).or_insert(member.number);
            }
            index.by_number.insert(member.number, member);
        }

        index
    }

    /// Looks up a member by exact alias string.
    pub fn by_alias(&self, alias: &str) -> Option<&Member> {
        let number = self.by_alias.get(alias)?;
        self.by_number.get(number)
    }

    /// Looks up a member by membership number.
    pub fn by_number(&self, number: MemberId) -> Option<&Member> {
        self.by_number.get(&number)
    }

    /// Number of members indexed.
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// True when the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}
