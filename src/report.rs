//! Award progress, endorsement, and result types.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::engine::config::ThresholdEntry;
use crate::types::MemberId;

/// Whether an endorsement is restricted by band or by mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EndorsementCategory {
    /// Restricted to one band.
    Band,
    /// Restricted to one mode.
    Mode,
}

/// Progress toward one award tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardProgress {
    /// Award name, e.g. "Centurion".
    pub award: String,
    /// Distinct members required.
    pub threshold: usize,
    /// Distinct qualifying members accumulated.
    pub current: usize,
    /// True when the tier requirements are met.
    pub achieved: bool,
    /// Human description of the requirement.
    pub description: String,
}

/// A per-band or per-mode sub-award derived from one threshold entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardEndorsement {
    /// Base award name from the threshold table.
    pub award: String,
    /// Band or mode restriction.
    pub category: EndorsementCategory,
    /// The band or mode value, uppercased as accumulated.
    pub value: String,
    /// Distinct members required.
    pub threshold: usize,
    /// Distinct qualifying members on this band or mode.
    pub current: usize,
    /// True when the threshold is met.
    pub achieved: bool,
}

/// Aggregate output of one award computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardCheckResult {
    /// Distinct members matched across the whole log.
    pub unique_members: usize,
    /// Per-tier progress entries.
    pub progress: Vec<AwardProgress>,
    /// Band and mode endorsements, sorted by (award, category, value).
    pub endorsements: Vec<AwardEndorsement>,
    /// Records decoded from the log before filtering.
    pub qso_count: usize,
    /// Records whose mode contains "CW".
    pub cw_qso_count: usize,
    /// Surviving records that matched a member.
    pub matched_qso_count: usize,
    /// Calls that never resolved to a member, deduplicated and sorted.
    pub unmatched_calls: Vec<String>,
    /// The endorsement threshold table actually used.
    pub thresholds: Vec<ThresholdEntry>,
}

/// Derives endorsements from the accumulated band and mode member sets.
///
/// One endorsement per (threshold entry, band) and (threshold entry, mode)
/// combination whose distinct-member count meets the threshold, sorted by
/// (award, category, value) for determinism.
pub fn endorsements(
    band_members: &HashMap<String, HashSet<MemberId>>,
    mode_members: &HashMap<String, HashSet<MemberId>>,
    thresholds: &[ThresholdEntry],
) -> Vec<AwardEndorsement> {
    let mut out = Vec::new();

    for entry in thresholds {
        collect_category(&mut out, entry, EndorsementCategory::Band, band_members);
        collect_category(&mut out, entry, EndorsementCategory::Mode, mode_members);
    }

    out.sort_by(|a, b| {
        (&a.award, a.category, &a.value).cmp(&(&b.award, b.category, &b.value))
    });
    out
}

fn collect_category(
    out: &mut Vec<AwardEndorsement>,
    entry: &ThresholdEntry,
    category: EndorsementCategory,
    members: &HashMap<String, HashSet<MemberId>>,
) {
    for (value, set) in members {
        if set.len() >= entry.threshold {
            out.push(AwardEndorsement {
                award: entry.award.clone(),
                category,
                value: value.clone(),
                threshold: entry.threshold,
                current: set.len(),
                achieved: set.len() >= entry.threshold,
            });
        }
    }
}
