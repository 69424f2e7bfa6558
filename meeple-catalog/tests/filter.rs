use meeple_catalog::{
    FilterCriteria, GameRecord, RangeOption, SortKey, adapt_value, filter, sort_records,
};
use serde_json::json;

fn sample_catalog() -> Vec<GameRecord> {
    [
        json!({
            "title": "Catan",
            "genre": ["Strategy"],
            "players": "3-4",
            "playtime": 90,
            "min_age": 10,
            "location": "Shelf A",
            "difficulty": "Medium",
            "rating": 7.5,
            "description": "Trade, build, settle."
        }),
        json!({
            "title": "Uno",
            "genre": "Family",
            "players": 2,
            "playtime": 20,
            "min_age": 7,
            "location": "Cabin",
            "difficulty": "Easy",
            "rating": 6.0,
            "description": "Classic card game."
        }),
        json!({
            "title": "Twilight Struggle",
            "genre": ["Strategy", "Historical"],
            "players": 2,
            "playtime": 180,
            "min_age": 13,
            "location": "Shelf A",
            "difficulty": "Hard",
            "description": "Cold War tug of war."
        }),
    ]
    .iter()
    .map(|v| adapt_value(v).unwrap())
    .collect()
}

// ── Range options ───────────────────────────────────────────────────────────

#[test]
fn range_option_parsing() {
    assert_eq!("all".parse::<RangeOption>(), Ok(RangeOption::All));
    assert_eq!("ALL".parse::<RangeOption>(), Ok(RangeOption::All));
    assert_eq!("60+".parse::<RangeOption>(), Ok(RangeOption::AtLeast(60)));
    assert_eq!("30-60".parse::<RangeOption>(), Ok(RangeOption::Between(30, 60)));
    assert_eq!("3".parse::<RangeOption>(), Ok(RangeOption::Exactly(3)));
    assert!("x-y".parse::<RangeOption>().is_err());
    assert!("banana".parse::<RangeOption>().is_err());
}

#[test]
fn range_option_between_is_inclusive() {
    let bucket: RangeOption = "30-60".parse().unwrap();
    assert!(!bucket.matches(29));
    assert!(bucket.matches(30));
    assert!(bucket.matches(45));
    assert!(bucket.matches(60));
    assert!(!bucket.matches(61));
}

#[test]
fn range_option_open_ended() {
    let bucket: RangeOption = "60+".parse().unwrap();
    assert!(!bucket.matches(59));
    assert!(bucket.matches(60));
    assert!(bucket.matches(200));
}

#[test]
fn range_option_all_always_matches() {
    for v in [0, 1, 15, 1000] {
        assert!(RangeOption::All.matches(v));
    }
}

#[test]
fn range_option_exact() {
    let bucket: RangeOption = "3".parse().unwrap();
    assert!(bucket.matches(3));
    assert!(!bucket.matches(4));
}

#[test]
fn range_option_display_round_trips() {
    for s in ["all", "60+", "30-60", "3"] {
        let parsed: RangeOption = s.parse().unwrap();
        assert_eq!(parsed.to_string(), s);
    }
}

// ── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn no_constraints_returns_full_catalog_in_order() {
    let catalog = sample_catalog();
    let result = filter(&catalog, &FilterCriteria::default());
    let titles: Vec<_> = result.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Catan", "Uno", "Twilight Struggle"]);
}

#[test]
fn genre_filter_matches_by_normalized_key() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        genre: Some("strategy".to_string()),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Catan", "Twilight Struggle"]);

    // Mixed-case selection normalizes before comparing.
    let criteria = FilterCriteria {
        genre: Some("  Family ".to_string()),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Uno"]);
}

#[test]
fn the_all_sentinel_imposes_no_constraint() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        genre: Some("all".to_string()),
        location: Some("ALL".to_string()),
        difficulty: Some("".to_string()),
        ..Default::default()
    };
    assert_eq!(filter(&catalog, &criteria).len(), catalog.len());
}

#[test]
fn playtime_bucket_excludes_longer_games() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        playtime: "0-15".parse().unwrap(),
        ..Default::default()
    };
    // Catan (90) and Uno (20) both exceed 15 minutes.
    assert!(filter(&catalog, &criteria).is_empty());

    let criteria = FilterCriteria {
        playtime: "15-30".parse().unwrap(),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Uno"]);
}

#[test]
fn player_bucket_uses_representative_minimum() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        players: "2".parse().unwrap(),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    // Catan is "3-4": its representative minimum is 3, not in bucket 2.
    assert_eq!(titles, vec!["Uno", "Twilight Struggle"]);
}

#[test]
fn age_threshold_excludes_younger_ratings() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        min_age: Some(8),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    // Uno's 7 is below the threshold.
    assert_eq!(titles, vec!["Catan", "Twilight Struggle"]);
}

#[test]
fn unknown_age_counts_as_zero_and_is_excluded_by_thresholds() {
    let record = adapt_value(&json!({"title": "Mystery"})).unwrap();
    let criteria = FilterCriteria {
        min_age: Some(6),
        ..Default::default()
    };
    assert!(!criteria.matches(&record));
}

#[test]
fn query_matches_title_or_description() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        query: Some("CATAN".to_string()),
        ..Default::default()
    };
    assert_eq!(filter(&catalog, &criteria).len(), 1);

    let criteria = FilterCriteria {
        query: Some("cold war".to_string()),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Twilight Struggle"]);
}

#[test]
fn location_and_difficulty_match_by_normalized_equality() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        location: Some("shelf a".to_string()),
        difficulty: Some("Hard".to_string()),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Twilight Struggle"]);
}

#[test]
fn all_criteria_compose_conjunctively() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        genre: Some("strategy".to_string()),
        players: "2".parse().unwrap(),
        min_age: Some(8),
        ..Default::default()
    };
    let titles: Vec<_> = filter(&catalog, &criteria)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Twilight Struggle"]);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        genre: Some("strategy".to_string()),
        ..Default::default()
    };
    let once: Vec<GameRecord> = filter(&catalog, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<GameRecord> = filter(&once, &criteria).into_iter().cloned().collect();
    assert_eq!(once, twice);
}

// ── Sorting ─────────────────────────────────────────────────────────────────

#[test]
fn sort_by_title_is_case_insensitive_ascending() {
    let catalog = sample_catalog();
    let mut records = filter(&catalog, &FilterCriteria::default());
    sort_records(&mut records, SortKey::Title);
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Catan", "Twilight Struggle", "Uno"]);
}

#[test]
fn sort_by_rating_descending_with_missing_as_zero() {
    let catalog = sample_catalog();
    let mut records = filter(&catalog, &FilterCriteria::default());
    sort_records(&mut records, SortKey::Rating);
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    // Twilight Struggle has no rating and sorts last.
    assert_eq!(titles, vec!["Catan", "Uno", "Twilight Struggle"]);
}

#[test]
fn sort_keeps_original_order_on_ties() {
    let a = adapt_value(&json!({"id": "a", "title": "Same", "rating": 5})).unwrap();
    let b = adapt_value(&json!({"id": "b", "title": "same", "rating": 5})).unwrap();
    let catalog = vec![a, b];
    let mut records = filter(&catalog, &FilterCriteria::default());
    sort_records(&mut records, SortKey::Rating);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let mut records = filter(&catalog, &FilterCriteria::default());
    sort_records(&mut records, SortKey::Title);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn sort_key_parsing() {
    assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
    assert_eq!("Rating".parse::<SortKey>(), Ok(SortKey::Rating));
    assert!("vibes".parse::<SortKey>().is_err());
}
