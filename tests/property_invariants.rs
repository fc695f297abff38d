use std::collections::BTreeSet;

use proptest::prelude::*;

use skcclog::{
    call,
    engine::{
        calc::AwardEngine,
        config::{EngineConfig, ThresholdEntry},
    },
    qso::QsoRecord,
    roster::{Member, RosterIndex},
};

const DX_PREFIXES: &[&str] = &["DL", "F", "EA8", "9A"];
const TAILS: &[&str] = &["P", "QRP", "M", "MM", "AM", "SOTA", "7", "0"];
const BANDS: &[&str] = &["160M", "80M", "40M", "20M", "15M", "10M"];

fn base_call_strategy() -> impl Strategy<Value = String> {
    ("[A-Z]{1,2}", 0u8..10, "[A-Z]{1,3}").prop_map(|(prefix, digit, suffix)| {
        format!("{prefix}{digit}{suffix}")
    })
}

fn decorated_call_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(prop::sample::select(DX_PREFIXES)),
        base_call_strategy(),
        prop::collection::vec(prop::sample::select(TAILS), 0..3),
    )
        .prop_map(|(dx, base, tails)| {
            let mut out = String::new();
            if let Some(dx) = dx {
                out.push_str(dx);
                out.push('/');
            }
            out.push_str(&base);
            for tail in tails {
                out.push('/');
                out.push_str(tail);
            }
            out
        })
}

#[test]
fn normalization_examples() {
    assert_eq!(call::normalize("DL/K1ABC"), "K1ABC");
    assert_eq!(call::normalize("K1ABC/7/P"), "K1ABC");
    assert_eq!(call::normalize("K1ABC/QRP"), "K1ABC");
    assert_eq!(call::normalize("k1abc"), "K1ABC");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in decorated_call_strategy()) {
        let once = call::normalize(&raw);
        prop_assert_eq!(call::normalize(&once), once.clone());
    }

    #[test]
    fn aliases_are_unique_and_lead_with_raw(raw in decorated_call_strategy()) {
        let aliases = call::aliases(&raw);
        prop_assert!(!aliases.is_empty());
        prop_assert_eq!(aliases[0].as_str(), raw.to_ascii_uppercase().as_str());

        let distinct: BTreeSet<&String> = aliases.iter().collect();
        prop_assert_eq!(distinct.len(), aliases.len());
    }

    #[test]
    fn unique_count_and_endorsements_track_distinct_members(
        contacts in prop::collection::vec(
            (0u32..30, 1u8..28, prop::sample::select(BANDS)),
            1..120,
        )
    ) {
        let members: Vec<Member> = (0..30)
            .map(|n| Member {
                call: format!("W{n}AB"),
                number: n + 1,
                join_date: None,
                rank: None,
            })
            .collect();
        let roster = RosterIndex::build(members);

        let qsos: Vec<QsoRecord> = contacts
            .iter()
            .map(|(idx, day, band)| QsoRecord {
                call: format!("W{idx}AB"),
                band: Some(band.to_string()),
                mode: Some("CW".to_string()),
                date: Some(format!("202401{day:02}")),
                time_on: None,
                club_id: None,
                key_type: None,
            })
            .collect();

        let engine = AwardEngine::new(EngineConfig {
            thresholds: vec![ThresholdEntry::new("Mini", 1)],
            ..EngineConfig::default()
        });
        let result = engine.calculate(&qsos, &roster);

        let expected: BTreeSet<u32> = contacts.iter().map(|(idx, _, _)| *idx).collect();
        prop_assert_eq!(result.unique_members, expected.len());
        prop_assert_eq!(result.matched_qso_count, qsos.len());
        prop_assert!(result.unmatched_calls.is_empty());

        for endorsement in &result.endorsements {
            prop_assert!(endorsement.current <= result.unique_members);
        }
    }
}
