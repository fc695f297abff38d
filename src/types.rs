//! Shared primitive IDs and award-related enums.

use serde::{Deserialize, Serialize};

/// SKCC membership number.
pub type MemberId = u32;
/// Numeric `YYYYMMDD` calendar date.
pub type DateNum = u32;
/// Numeric `YYYYMMDDHHMMSS` sort timestamp; `0` is the minimum and sorts first.
pub type Timestamp = u64;

/// Achievement rank suffix carried on an SKCC number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Centurion ("C").
    Centurion,
    /// Tribune ("T").
    Tribune,
    /// Senator ("S").
    Senator,
}

impl Rank {
    /// Parses a rank from the letter suffix of an SKCC number field.
    ///
    /// Only the first letter matters ("14947C" and "14947Cx8" are both
    /// Centurion). Returns `None` for an empty or unrecognized suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.chars().next()?.to_ascii_uppercase() {
            'C' => Some(Self::Centurion),
            'T' => Some(Self::Tribune),
            'S' => Some(Self::Senator),
            _ => None,
        }
    }

    /// True for Tribune or Senator.
    pub fn is_tribune_or_higher(self) -> bool {
        matches!(self, Self::Tribune | Self::Senator)
    }
}

/// Award tier evaluated by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardTier {
    /// 100 distinct members worked.
    Centurion,
    /// 500 distinct Centurion-or-higher members worked.
    Tribune,
    /// 400 distinct Centurion-or-higher members worked.
    TribuneX8,
    /// 200 distinct Tribune-or-higher members worked, after Tribune x8.
    Senator,
}

impl AwardTier {
    /// Display name used in progress entries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Centurion => "Centurion",
            Self::Tribune => "Tribune",
            Self::TribuneX8 => "Tribune x8",
            Self::Senator => "Senator",
        }
    }

    /// Distinct-member threshold for this tier.
    pub fn threshold(self) -> usize {
        match self {
            Self::Centurion => 100,
            Self::Tribune => 500,
            Self::TribuneX8 => 400,
            Self::Senator => 200,
        }
    }
}
