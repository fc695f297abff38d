//! Parsed log record type and timestamp reconstruction.

use serde::{Deserialize, Serialize};

use crate::types::{DateNum, Timestamp};

/// One logged contact as decoded from the record stream.
///
/// Immutable once parsed. Fields the log may omit are `Option`; an empty or
/// whitespace-only field value decodes as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsoRecord {
    /// Operator-entered callsign text, uppercased.
    pub call: String,
    /// Band label as logged, e.g. "40M".
    pub band: Option<String>,
    /// Mode label as logged, e.g. "CW".
    pub mode: Option<String>,
    /// Contact date as logged, `YYYYMMDD`.
    pub date: Option<String>,
    /// Start time as logged, `HHMM` or `HHMMSS`.
    pub time_on: Option<String>,
    /// The other party's club number field as logged, number plus
    /// achievement suffix at the time of the contact, e.g. "14947C".
    pub club_id: Option<String>,
    /// Key device descriptor as logged, e.g. "Straight Key".
    pub key_type: Option<String>,
}

impl QsoRecord {
    /// Contact date as a numeric `YYYYMMDD`, `None` when absent or malformed.
    pub fn date_num(&self) -> Option<DateNum> {
        let date = self.date.as_deref()?;
        if date.len() != 8 {
            return None;
        }
        date.parse().ok()
    }

    /// Reconstructed sort timestamp.
    ///
    /// A malformed or missing date yields `0`, the minimum, so such records
    /// sort first. A malformed time contributes `0` seconds within the day.
    pub fn sort_key(&self) -> Timestamp {
        let Some(date) = self.date_num() else {
            return 0;
        };
        Timestamp::from(date) * 1_000_000 + self.time_num()
    }

    fn time_num(&self) -> Timestamp {
        let Some(time) = self.time_on.as_deref() else {
            return 0;
        };
        let parsed: Option<Timestamp> = match time.len() {
            // HHMM logs carry no seconds.
            4 => time.parse().ok().map(|t: Timestamp| t * 100),
            6 => time.parse().ok(),
            _ => None,
        };
        parsed.unwrap_or(0)
    }
}
