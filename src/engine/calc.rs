//! Batch award calculation over a parsed log.

use std::collections::BTreeSet;

use hashbrown::{HashMap, HashSet};

use crate::call;
use crate::qso::QsoRecord;
use crate::report::{self, AwardCheckResult, AwardProgress};
use crate::roster::RosterIndex;
use crate::types::{AwardTier, MemberId, Timestamp};

use super::config::EngineConfig;
use super::rules;

/// The award rule engine: a pure, synchronous batch transform.
///
/// One `calculate` call filters the log, orders it chronologically, matches
/// each surviving record to a roster member, and accumulates qualifying
/// member sets per tier and per band/mode. Nothing is retained between
/// calls; concurrent calls on separate inputs need no coordination.
#[derive(Debug, Clone, Default)]
pub struct AwardEngine {
    config: EngineConfig,
}

struct Accumulation {
    total_qsos: usize,
    cw_qsos: usize,
    matched_qsos: usize,
    first_seen: HashMap<MemberId, Timestamp>,
    tribune_pool: HashSet<MemberId>,
    senator_pool: HashSet<MemberId>,
    band_members: HashMap<String, HashSet<MemberId>>,
    mode_members: HashMap<String, HashSet<MemberId>>,
    unmatched: BTreeSet<String>,
    centurion_reached_at: Option<Timestamp>,
}

impl AwardEngine {
    /// Constructs an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine evaluates with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates the full log against the roster.
    ///
    /// Never fails on data: an empty log or roster yields a zero-progress
    /// result, unresolved calls land in `unmatched_calls`, and malformed
    /// dates only affect sort order.
    pub fn calculate(&self, qsos: &[QsoRecord], roster: &RosterIndex) -> AwardCheckResult {
        let acc = self.accumulate(qsos, roster);
        self.assemble(acc, roster)
    }

    /// Timestamp of the contact that worked the 100th distinct member, when
    /// the log reaches that far.
    pub fn centurion_milestone(
        &self,
        qsos: &[QsoRecord],
        roster: &RosterIndex,
    ) -> Option<Timestamp> {
        self.accumulate(qsos, roster).centurion_reached_at
    }

    fn accumulate(&self, qsos: &[QsoRecord], roster: &RosterIndex) -> Accumulation {
        let mut acc = Accumulation {
            total_qsos: qsos.len(),
            cw_qsos: qsos
                .iter()
                .filter(|q| rules::is_cw(q.mode.as_deref()))
                .count(),
            matched_qsos: 0,
            first_seen: HashMap::new(),
            tribune_pool: HashSet::new(),
            senator_pool: HashSet::new(),
            band_members: HashMap::new(),
            mode_members: HashMap::new(),
            unmatched: BTreeSet::new(),
            centurion_reached_at: None,
        };

        let mut survivors: Vec<&QsoRecord> =
            qsos.iter().filter(|q| self.passes_filters(q)).collect();
        // Vec::sort_by_key is stable; equal timestamps keep log order.
        survivors.sort_by_key(|q| q.sort_key());

        for qso in survivors {
            self.apply(qso, roster, &mut acc);
        }

        acc
    }

    fn passes_filters(&self, qso: &QsoRecord) -> bool {
        if self.config.cw_only && !rules::is_cw(qso.mode.as_deref()) {
            return false;
        }
        if rules::is_special_event_excluded(
            &qso.call,
            qso.date_num(),
            self.config.special_event_cutoff,
        ) {
            return false;
        }
        if self.config.enforce_key_type
            && !rules::key_type_allowed(
                qso.key_type.as_deref(),
                &self.config.allowed_key_types,
                self.config.treat_missing_key_as_valid,
            )
        {
            return false;
        }
        true
    }

    fn apply(&self, qso: &QsoRecord, roster: &RosterIndex, acc: &mut Accumulation) {
        let resolved = self.resolve(qso, roster);

        let Some(number) = resolved else {
            acc.unmatched.insert(qso.call.trim().to_ascii_uppercase());
            return;
        };

        // A contact logged before the member joined is discarded outright:
        // not matched, not unmatched.
        if let (Some(member), Some(date)) = (roster.by_number(number), qso.date_num()) {
            if member.join_date.is_some_and(|joined| joined > date) {
                return;
            }
        }

        acc.matched_qsos += 1;
        let ts = qso.sort_key();

        if !acc.first_seen.contains_key(&number) {
            acc.first_seen.insert(number, ts);
            if acc.first_seen.len() == AwardTier::Centurion.threshold()
                && acc.centurion_reached_at.is_none()
            {
                acc.centurion_reached_at = Some(ts);
            }
        }

        let recorded = rules::recorded_rank(qso.club_id.as_deref());
        if !self.config.enforce_suffix_rules
            || rules::tier_qualifies(AwardTier::Tribune, recorded)
        {
            acc.tribune_pool.insert(number);
        }
        if !self.config.enforce_suffix_rules
            || rules::tier_qualifies(AwardTier::Senator, recorded)
        {
            acc.senator_pool.insert(number);
        }

        if let Some(band) = qso.band.as_deref() {
            acc.band_members
                .entry(band.to_ascii_uppercase())
                .or_default()
                .insert(number);
        }
        if let Some(mode) = qso.mode.as_deref() {
            acc.mode_members
                .entry(mode.to_ascii_uppercase())
                .or_default()
                .insert(number);
        }
    }

    fn resolve(&self, qso: &QsoRecord, roster: &RosterIndex) -> Option<MemberId> {
        if let Some(member) = roster.by_alias(&call::normalize(&qso.call)) {
            return Some(member.number);
        }

        let (number, _) = qso
            .club_id
            .as_deref()
            .and_then(rules::parse_club_number)?;
        if roster.by_number(number).is_some() || self.config.include_unknown_ids {
            return Some(number);
        }
        None
    }

    fn assemble(&self, acc: Accumulation, roster: &RosterIndex) -> AwardCheckResult {
        let unique = acc.first_seen.len();

        let progress = if self.config.enforce_suffix_rules {
            self.tiered_progress(&acc)
        } else {
            self.legacy_progress(&acc, roster)
        };

        let endorsements = report::endorsements(
            &acc.band_members,
            &acc.mode_members,
            &self.config.thresholds,
        );

        AwardCheckResult {
            unique_members: unique,
            progress,
            endorsements,
            qso_count: acc.total_qsos,
            cw_qso_count: acc.cw_qsos,
            matched_qso_count: acc.matched_qsos,
            unmatched_calls: acc.unmatched.into_iter().collect(),
            thresholds: self.config.thresholds.clone(),
        }
    }

    fn tiered_progress(&self, acc: &Accumulation) -> Vec<AwardProgress> {
        let unique = acc.first_seen.len();
        let tribune = acc.tribune_pool.len();
        let senator = acc.senator_pool.len();

        let centurion = progress_entry(
            AwardTier::Centurion,
            unique,
            unique >= AwardTier::Centurion.threshold(),
            "100 unique members worked",
        );
        let tribune_entry = progress_entry(
            AwardTier::Tribune,
            tribune,
            tribune >= AwardTier::Tribune.threshold(),
            "500 unique members worked who held Centurion or higher at contact time",
        );
        let tx8 = progress_entry(
            AwardTier::TribuneX8,
            tribune,
            tribune >= AwardTier::TribuneX8.threshold(),
            "400 unique members worked who held Centurion or higher at contact time",
        );
        let senator_entry = progress_entry(
            AwardTier::Senator,
            senator,
            senator >= AwardTier::Senator.threshold() && tx8.achieved,
            "200 unique members worked who held Tribune or higher at contact time, after Tribune x8",
        );

        vec![centurion, tribune_entry, tx8, senator_entry]
    }

    fn legacy_progress(&self, acc: &Accumulation, roster: &RosterIndex) -> Vec<AwardProgress> {
        let unique = acc.first_seen.len();
        let ranked_now = acc
            .first_seen
            .keys()
            .filter(|number| {
                roster
                    .by_number(**number)
                    .is_some_and(|member| member.rank.is_some())
            })
            .count();

        vec![
            progress_entry(
                AwardTier::Centurion,
                unique,
                unique >= AwardTier::Centurion.threshold(),
                "100 unique members worked",
            ),
            progress_entry(
                AwardTier::Tribune,
                ranked_now,
                ranked_now >= AwardTier::Tribune.threshold(),
                "500 unique members worked currently holding Centurion or higher",
            ),
        ]
    }
}

fn progress_entry(
    tier: AwardTier,
    current: usize,
    achieved: bool,
    description: &str,
) -> AwardProgress {
    AwardProgress {
        award: tier.name().to_string(),
        threshold: tier.threshold(),
        current,
        achieved,
        description: description.to_string(),
    }
}
