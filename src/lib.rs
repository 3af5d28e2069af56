/*!
A week-based year and week number, anchored to a definition of what a week
is.

The central type in this crate is [`YearWeek`]. It identifies one week by a
_week-based year_ and a _week number_, interpreted according to a
[`WeekDefinition`]. A week definition says which weekday a week starts on,
and how many days of a calendar year its first week must contain in order to
count as week `1` of that year. The most common definition is the one from
ISO 8601, available as [`WeekDefinition::ISO`].

Calendar dates are represented by Jiff's [`jiff::civil::Date`]. This crate
converts dates to year-weeks and back, and gets the boundary cases right:
the week-based year of a date is not always its calendar year.

# Example

```
use jiff::civil::{date, Weekday};
use yearweek::{WeekDefinition, YearWeek};

// Under ISO 8601, the last day of 2018 is in the first week of 2019.
let yw = YearWeek::from_date(date(2018, 12, 31), WeekDefinition::ISO);
assert_eq!(yw.year(), 2019);
assert_eq!(yw.week(), 1);
assert_eq!(yw.to_string(), "2019-W01");

// And the first three days of 2021 are in the 53rd week of 2020.
let yw = YearWeek::from(date(2021, 1, 3));
assert_eq!(yw.to_string(), "2020-W53");
assert_eq!(yw.at_day(Weekday::Monday)?, date(2020, 12, 28));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, this causes [`Error`] to
implement the `std::error::Error` trait and enables Jiff's `std` feature.
* **logging** - When enabled, the `log` crate is used to emit messages about
how dates at year boundaries are resolved. This is mostly useful for
debugging.
* **serde** - Enables `Serialize` and `Deserialize` implementations for
[`WeekDefinition`] and [`YearWeek`].
*/

#![no_std]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors are heap allocated.
extern crate alloc;

pub use crate::{
    error::Error,
    week::{WeekDates, WeekDefinition, YearWeek},
};

#[macro_use]
mod logging;

mod error;
mod util;
mod week;
