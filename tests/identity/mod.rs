use std::{
    collections::{hash_map::RandomState, HashSet},
    hash::{BuildHasher, Hash, Hasher},
};

use jiff::civil::{date, Weekday};
use yearweek::{WeekDefinition, YearWeek};

fn hash(state: &RandomState, yw: YearWeek) -> u64 {
    let mut hasher = state.build_hasher();
    yw.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_values_hash_equal() {
    let monday4 = WeekDefinition::new(Weekday::Monday, 4).unwrap();
    let a = YearWeek::iso(2019, 1);
    let b = YearWeek::new(2019, 1, monday4);
    let c = YearWeek::from(date(2018, 12, 31));
    assert_eq!(a, b);
    assert_eq!(a, c);

    let state = RandomState::new();
    assert_eq!(hash(&state, a), hash(&state, b));
    assert_eq!(hash(&state, a), hash(&state, c));
}

#[test]
fn every_field_matters() {
    let sunday = WeekDefinition::SUNDAY_START;
    let base = YearWeek::iso(2024, 10);
    let variants = [
        YearWeek::iso(2024, 11),
        YearWeek::iso(2023, 10),
        YearWeek::new(2024, 10, sunday),
        YearWeek::new(
            2024,
            10,
            WeekDefinition::new(Weekday::Monday, 5).unwrap(),
        ),
        YearWeek::new(
            2024,
            10,
            WeekDefinition::new(Weekday::Tuesday, 4).unwrap(),
        ),
    ];
    for other in variants {
        assert_ne!(base, other, "{other:?}");
    }

    let set: HashSet<YearWeek> =
        variants.into_iter().chain([base, base]).collect();
    assert_eq!(set.len(), 6);
}

#[test]
fn same_week_same_value() {
    let def = WeekDefinition::SUNDAY_START;
    let week: HashSet<YearWeek> = YearWeek::new(2020, 1, def)
        .dates()
        .unwrap()
        .map(|d| YearWeek::from_date(d, def))
        .collect();
    assert_eq!(week.len(), 1);
    assert!(week.contains(&YearWeek::new(2020, 1, def)));
}

#[test]
fn display_ignores_definition() {
    let iso = YearWeek::iso(2024, 1);
    let sunday = YearWeek::new(2024, 1, WeekDefinition::SUNDAY_START);
    assert_ne!(iso, sunday);
    assert_eq!(iso.to_string(), sunday.to_string());
}

#[test]
fn copies_are_independent_values() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<YearWeek>();
    assert_send_sync::<WeekDefinition>();

    let a = YearWeek::iso(2020, 53);
    let b = a;
    assert_eq!(a, b);
    assert_eq!(a.at_day(Weekday::Monday).unwrap(), date(2020, 12, 28));
    assert_eq!(b.at_day(Weekday::Monday).unwrap(), date(2020, 12, 28));
}
