//! Pure qualification and filter rules.
//!
//! Every rule is a free function taking its configuration explicitly, so
//! each is testable in isolation from the accumulation loop.

use crate::types::{AwardTier, DateNum, MemberId, Rank};

use super::config::{CLUB_CALL, EVENT_PREFIX};

/// True when the mode contains "CW", case-insensitive.
pub fn is_cw(mode: Option<&str>) -> bool {
    mode.is_some_and(|m| m.to_ascii_uppercase().contains("CW"))
}

/// True when the QSO must be dropped as a reserved special-event contact.
///
/// Applies to the club-operations call exactly, or the event prefix alone or
/// with trailing `/`-segments, and only on/after the cutoff date. A missing
/// or malformed date reads as the minimum and is never on/after the cutoff.
pub fn is_special_event_excluded(call: &str, date: Option<DateNum>, cutoff: DateNum) -> bool {
    if date.unwrap_or(0) < cutoff {
        return false;
    }
    let call = call.trim().to_ascii_uppercase();
    call == CLUB_CALL
        || call == EVENT_PREFIX
        || call.starts_with(&format!("{EVENT_PREFIX}/"))
}

/// True when the key-device field passes the allowed-token check.
///
/// The field is tokenized on non-alphanumerics and passes when any token is
/// in the allowed list. An absent field passes or fails per `missing_ok`.
pub fn key_type_allowed(key: Option<&str>, allowed: &[String], missing_ok: bool) -> bool {
    let Some(key) = key else {
        return missing_ok;
    };
    key.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|tok| !tok.is_empty())
        .any(|tok| allowed.iter().any(|a| a.eq_ignore_ascii_case(tok)))
}

/// Parses a `14947C`-style club number field into the membership number and
/// the achievement rank recorded at the time of the contact.
pub fn parse_club_number(field: &str) -> Option<(MemberId, Option<Rank>)> {
    let field = field.trim();
    let digits: String = field.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let number: MemberId = digits.parse().ok()?;

    let suffix: String = field[digits.len()..]
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    Some((number, Rank::from_suffix(&suffix)))
}

/// The rank recorded on a QSO's club number field, if any.
pub fn recorded_rank(club_id: Option<&str>) -> Option<Rank> {
    parse_club_number(club_id?).and_then(|(_, rank)| rank)
}

/// Whether a matched QSO's recorded rank qualifies it for a tier.
///
/// The recorded rank is the point-in-time suffix from the log, not the
/// member's present roster suffix.
pub fn tier_qualifies(tier: AwardTier, recorded: Option<Rank>) -> bool {
    match tier {
        AwardTier::Centurion => true,
        AwardTier::Tribune | AwardTier::TribuneX8 => recorded.is_some(),
        AwardTier::Senator => recorded.is_some_and(Rank::is_tribune_or_higher),
    }
}
