//! Engine configuration surface.
//!
//! Fixed historical tables (allowed key devices, the special-event cutoff,
//! the default endorsement threshold table) live here as explicit
//! configuration rather than module-level globals, so tests can override
//! them deterministically.

use serde::{Deserialize, Serialize};

use crate::types::DateNum;

/// Reserved club-operations call, excluded on/after the cutoff date.
pub const CLUB_CALL: &str = "K9SKC";

/// Reserved special-event prefix, excluded on/after the cutoff date when it
/// appears alone or as the leading `/`-segment.
pub const EVENT_PREFIX: &str = "K3Y";

/// One named endorsement threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    /// Base award name, e.g. "Centurion".
    pub award: String,
    /// Distinct-member count required.
    pub threshold: usize,
}

impl ThresholdEntry {
    /// Constructs a threshold table entry.
    pub fn new(award: impl Into<String>, threshold: usize) -> Self {
        Self {
            award: award.into(),
            threshold,
        }
    }
}

/// Award engine configuration. Every knob is independent and defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Drop QSOs whose mode does not contain "CW".
    pub cw_only: bool,
    /// Drop QSOs whose key device is not an allowed mechanical key.
    pub enforce_key_type: bool,
    /// Key-device tokens accepted when `enforce_key_type` is on.
    pub allowed_key_types: Vec<String>,
    /// Keep QSOs with no key-device field when `enforce_key_type` is on.
    pub treat_missing_key_as_valid: bool,
    /// Accept club numbers parsed from the log even when absent from the roster.
    pub include_unknown_ids: bool,
    /// Evaluate tiers from the rank recorded on each QSO; when off, the
    /// legacy roster-suffix fallback applies.
    pub enforce_suffix_rules: bool,
    /// Endorsement threshold table carried through to the result.
    pub thresholds: Vec<ThresholdEntry>,
    /// Date on/after which reserved event calls stop counting.
    pub special_event_cutoff: DateNum,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cw_only: true,
            enforce_key_type: false,
            allowed_key_types: default_key_types(),
            treat_missing_key_as_valid: true,
            include_unknown_ids: false,
            enforce_suffix_rules: true,
            thresholds: default_thresholds(),
            special_event_cutoff: 20091201,
        }
    }
}

fn default_key_types() -> Vec<String> {
    ["STRAIGHT", "BUG", "COOTIE", "SIDESWIPER", "SIDEWINDER"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_thresholds() -> Vec<ThresholdEntry> {
    vec![
        ThresholdEntry::new("Centurion", 100),
        ThresholdEntry::new("Tribune", 500),
        ThresholdEntry::new("Senator", 1000),
    ]
}
