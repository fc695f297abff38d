use skcclog::{
    persist::{sqlite::SqliteRosterCache, RosterSource},
    roster::Member,
    types::Rank,
};

fn sample_members() -> Vec<Member> {
    vec![
        Member {
            call: "K1ABC".to_string(),
            number: 1,
            join_date: Some(20100415),
            rank: Some(Rank::Tribune),
        },
        Member {
            call: "WA9XYZ".to_string(),
            number: 2,
            join_date: None,
            rank: None,
        },
    ]
}

#[test]
fn save_then_load_round_trips() {
    let mut cache = SqliteRosterCache::open_in_memory().expect("open");
    cache.save_roster(&sample_members()).expect("save");

    let loaded = cache.load_roster().expect("load");
    assert_eq!(loaded, sample_members());
    assert!(cache.saved_at_ms().expect("saved_at").is_some());
}

#[test]
fn empty_cache_loads_empty_without_error() {
    let cache = SqliteRosterCache::open_in_memory().expect("open");

    assert!(cache.load_roster().expect("load").is_empty());
    assert_eq!(cache.saved_at_ms().expect("saved_at"), None);
}

#[test]
fn save_replaces_the_previous_snapshot() {
    let mut cache = SqliteRosterCache::open_in_memory().expect("open");
    cache.save_roster(&sample_members()).expect("first save");

    let replacement = vec![Member {
        call: "N0CAL".to_string(),
        number: 3,
        join_date: None,
        rank: Some(Rank::Senator),
    }];
    cache.save_roster(&replacement).expect("second save");

    assert_eq!(cache.load_roster().expect("load"), replacement);
}

#[test]
fn snapshot_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.db");

    {
        let mut cache = SqliteRosterCache::open(&path).expect("open");
        cache.save_roster(&sample_members()).expect("save");
    }

    let cache = SqliteRosterCache::open(&path).expect("reopen");
    assert_eq!(cache.load_roster().expect("load"), sample_members());
}

#[test]
fn cache_acts_as_a_roster_source() {
    let mut cache = SqliteRosterCache::open_in_memory().expect("open");
    cache.save_roster(&sample_members()).expect("save");

    let fetched = cache.fetch().expect("fetch");
    assert_eq!(fetched.len(), 2);
}
