use jiff::{
    civil::{date, Date, ISOWeekDate, Weekday},
    ToSpan,
};
use yearweek::{WeekDefinition, YearWeek};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Every week definition there is.
fn definitions() -> impl Iterator<Item = WeekDefinition> {
    WEEKDAYS.into_iter().flat_map(|first| {
        (1..=7).map(move |days| WeekDefinition::new(first, days).unwrap())
    })
}

/// Every date within 3 days of a calendar year boundary, from the end of
/// 1999 up to the start of 2030.
fn boundary_dates() -> impl Iterator<Item = Date> {
    (2000..=2030).flat_map(|year| {
        let jan1 = date(year, 1, 1);
        (-3i64..=2).map(move |days| jan1.checked_add(days.days()).unwrap())
    })
}

#[test]
fn scenarios() {
    let _ = crate::Logger::init();

    let cases = [
        (date(2018, 12, 30), (2018, 52), "2018-W52", date(2018, 12, 24)),
        (date(2018, 12, 31), (2019, 1), "2019-W01", date(2018, 12, 31)),
        (date(2019, 1, 1), (2019, 1), "2019-W01", date(2018, 12, 31)),
        (date(2020, 12, 31), (2020, 53), "2020-W53", date(2020, 12, 28)),
        (date(2021, 1, 1), (2020, 53), "2020-W53", date(2020, 12, 28)),
        (date(2021, 1, 4), (2021, 1), "2021-W01", date(2021, 1, 4)),
    ];
    for (d, (year, week), text, monday) in cases {
        let yw = YearWeek::from_date(d, WeekDefinition::ISO);
        assert_eq!(yw, YearWeek::iso(year, week), "for {d}");
        assert_eq!(yw, YearWeek::from(d), "for {d}");
        assert_eq!(yw.to_string(), text, "for {d}");
        assert_eq!(yw.at_day(Weekday::Monday).unwrap(), monday, "for {d}");
    }
}

/// Near year boundaries, the ISO week-based year is the calendar year of the
/// Thursday in the same week.
#[test]
fn iso_year_is_year_of_thursday() {
    let _ = crate::Logger::init();

    for d in boundary_dates() {
        let yw = YearWeek::from_iso_date(d);
        let thursday = yw.at_day(Weekday::Thursday).unwrap();
        assert_eq!(yw.year(), thursday.year(), "for {d}");
        assert_eq!(YearWeek::from(ISOWeekDate::from_date(d)), yw, "for {d}");
        if yw.year() != d.year() {
            // Only the last days of December or the first days of January
            // can land in a neighboring week-based year.
            if yw.year() > d.year() {
                assert_eq!((d.month(), yw.week()), (12, 1), "for {d}");
                assert!(d.day() >= 29, "for {d}");
            } else {
                assert_eq!(d.month(), 1, "for {d}");
                assert!(d.day() <= 3, "for {d}");
                assert!(yw.week() == 52 || yw.week() == 53, "for {d}");
            }
        }
    }
}

/// For any week definition, the first week of a year is the earliest week
/// that has at least `minimal_days` days in that year.
#[test]
fn first_week_has_minimal_days() {
    let _ = crate::Logger::init();

    for def in definitions() {
        for year in 2000..=2030 {
            let first = YearWeek::new(year, 1, def);
            let days_in_year = first
                .dates()
                .unwrap()
                .filter(|d| d.year() == year)
                .count();
            assert!(
                days_in_year >= usize::try_from(def.minimal_days()).unwrap(),
                "for {first} under {def:?}",
            );

            let weeks = def.weeks_in_year(year - 1).unwrap();
            let last = YearWeek::new(year - 1, weeks, def);
            let days_in_year =
                last.dates().unwrap().filter(|d| d.year() == year).count();
            assert!(
                days_in_year < usize::try_from(def.minimal_days()).unwrap(),
                "for {last} under {def:?}",
            );
        }
    }
}

#[test]
fn boundary_dates_roundtrip_under_every_definition() {
    let _ = crate::Logger::init();

    for def in definitions() {
        for d in boundary_dates() {
            let yw = YearWeek::from_date(d, def);
            assert!(yw.is_valid(), "{yw} for {d} under {def:?}");
            assert!(
                (i32::from(yw.year()) - i32::from(d.year())).abs() <= 1,
                "{yw} for {d} under {def:?}",
            );

            let first = yw.at_day(def.first_weekday()).unwrap();
            assert_eq!(first.weekday(), def.first_weekday());
            assert_eq!(YearWeek::from_date(first, def), yw, "for {d}");
            assert!(first <= d && d <= yw.last_date().unwrap(), "for {d}");

            for weekday in WEEKDAYS {
                let got = yw.at_day(weekday).unwrap();
                assert_eq!(got.weekday(), weekday, "for {d}");
                assert_eq!(YearWeek::from_date(got, def), yw, "for {d}");
            }
        }
    }
}

/// Consecutive weeks are exactly seven days apart, and week numbers restart
/// at 1 exactly once per week-based year.
#[test]
fn weeks_are_contiguous() {
    let _ = crate::Logger::init();

    for def in definitions() {
        let mut yw = YearWeek::from_date(date(1999, 6, 1), def);
        let mut first = yw.first_date().unwrap();
        while first.year() < 2031 {
            let next_first = first.checked_add(7.days()).unwrap();
            let next = YearWeek::from_date(next_first, def);
            if yw.week() == yw.weeks_in_year().unwrap() {
                assert_eq!(next, YearWeek::new(yw.year() + 1, 1, def));
            } else {
                assert_eq!(next, YearWeek::new(yw.year(), yw.week() + 1, def));
            }
            assert_eq!(next.first_date().unwrap(), next_first);
            yw = next;
            first = next_first;
        }
    }
}

#[test]
fn invalid_weeks_never_resolve() {
    let _ = crate::Logger::init();

    for def in definitions() {
        for year in 2000..=2030 {
            let max = def.weeks_in_year(year).unwrap();
            for week in [0, max + 1] {
                let yw = YearWeek::new(year, week, def);
                assert!(!yw.is_valid(), "{yw} under {def:?}");
                for weekday in WEEKDAYS {
                    let err = yw.at_day(weekday).unwrap_err();
                    assert!(err.is_range(), "{yw} under {def:?}: {err}");
                }
            }
        }
    }
}
