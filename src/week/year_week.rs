use jiff::{
    civil::{Date, ISOWeekDate, Weekday},
    Span,
};

use crate::{
    error::{week::Error as E, Error, ErrorContext},
    week::WeekDefinition,
};

/// A week number in a week-based year, along with the definition of what a
/// week is.
///
/// A `YearWeek` is a triple of:
///
/// * A week-based year. This is the year that a week belongs to, which may
/// be different from the calendar year of some of the days within that week.
/// For example, under the ISO 8601 definition, `2018-12-31` falls in the
/// first week of the week-based year `2019`, and `2021-01-01` falls in the
/// 53rd week of the week-based year `2020`.
/// * A week number, from `1` up to `52` or `53`.
/// * A [`WeekDefinition`], which determines both of the above for any given
/// date. A year-week doesn't mean anything without it.
///
/// # Equality
///
/// Two `YearWeek` values are equal only when their years, weeks _and_ week
/// definitions are equal. In particular, the same `(year, week)` pair under
/// different definitions refers to different weeks and compares unequal:
///
/// ```
/// use yearweek::{WeekDefinition, YearWeek};
///
/// assert_ne!(
///     YearWeek::iso(2024, 10),
///     YearWeek::new(2024, 10, WeekDefinition::SUNDAY_START),
/// );
/// ```
///
/// # Validity
///
/// Constructing a `YearWeek` from raw integers never fails and never checks
/// that the week number is one the week definition can actually produce for
/// the year given. Use [`YearWeek::validate`] or [`YearWeek::is_valid`] for
/// that. Conversions back to dates, such as [`YearWeek::at_day`], always
/// check and return an error for an invalid week.
///
/// # Display
///
/// The `Display` impl writes the year, followed by `-W`, followed by the week
/// number zero padded to two digits:
///
/// ```
/// use jiff::civil::date;
/// use yearweek::YearWeek;
///
/// assert_eq!(YearWeek::from(date(2018, 12, 31)).to_string(), "2019-W01");
/// assert_eq!(YearWeek::from(date(2021, 1, 1)).to_string(), "2020-W53");
/// assert_eq!(YearWeek::iso(-44, 11).to_string(), "-44-W11");
/// ```
///
/// Note that the week definition is not included.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearWeek {
    year: i16,
    week: i8,
    definition: WeekDefinition,
}

impl YearWeek {
    /// Creates a new year-week from a week-based year, a week number and a
    /// week definition.
    ///
    /// No validation is performed on `year` or `week`.
    ///
    /// # Example
    ///
    /// ```
    /// use yearweek::{WeekDefinition, YearWeek};
    ///
    /// let yw = YearWeek::new(2019, 1, WeekDefinition::ISO);
    /// assert_eq!(yw.year(), 2019);
    /// assert_eq!(yw.week(), 1);
    /// assert_eq!(yw.definition(), WeekDefinition::ISO);
    /// ```
    #[inline]
    pub const fn new(
        year: i16,
        week: i8,
        definition: WeekDefinition,
    ) -> YearWeek {
        YearWeek { year, week, definition }
    }

    /// Creates a new year-week using the [ISO 8601 week
    /// definition](WeekDefinition::ISO).
    ///
    /// This is a convenience routine for
    /// `YearWeek::new(year, week, WeekDefinition::ISO)`.
    #[inline]
    pub const fn iso(year: i16, week: i8) -> YearWeek {
        YearWeek::new(year, week, WeekDefinition::ISO)
    }

    /// Returns the year-week that the given date falls in, according to the
    /// given week definition.
    ///
    /// This never fails. Note that the week-based year returned may be
    /// `-10000` or `10000` for dates at the very edges of Jiff's supported
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use yearweek::{WeekDefinition, YearWeek};
    ///
    /// let yw = YearWeek::from_date(date(2020, 12, 31), WeekDefinition::ISO);
    /// assert_eq!(yw, YearWeek::iso(2020, 53));
    ///
    /// // When weeks start on Sunday and week 1 is the week containing
    /// // January 1st, the same date is in the first week of 2021.
    /// let def = WeekDefinition::SUNDAY_START;
    /// let yw = YearWeek::from_date(date(2020, 12, 31), def);
    /// assert_eq!(yw, YearWeek::new(2021, 1, def));
    /// ```
    pub fn from_date(date: Date, definition: WeekDefinition) -> YearWeek {
        let year = date.year();
        let day = date.day_of_year();
        let jan1 = date.first_of_year().weekday();
        let layout = definition.layout(jan1, date.days_in_year());
        if day < layout.start {
            let previous = definition.previous_layout(jan1, year);
            trace!(
                "{date} is before week 1 of {year} (which starts on day \
                 {start}), so it belongs to week {week} of {prev}",
                start = layout.start,
                week = previous.weeks,
                prev = year - 1,
            );
            YearWeek::new(year - 1, previous.weeks, definition)
        } else if day >= layout.next_start {
            trace!(
                "{date} is on or after week 1 of {next} (which starts on \
                 day {start} of {year}), so it belongs to week 1 of {next}",
                start = layout.next_start,
                next = year + 1,
            );
            YearWeek::new(year + 1, 1, definition)
        } else {
            // At most 53, so this always fits in an `i8`.
            let week = ((day - layout.start) / 7 + 1) as i8;
            YearWeek::new(year, week, definition)
        }
    }

    /// Returns the year-week that the given date falls in, according to the
    /// [ISO 8601 week definition](WeekDefinition::ISO).
    ///
    /// This is also available via a `From<Date>` trait implementation.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use yearweek::YearWeek;
    ///
    /// assert_eq!(
    ///     YearWeek::from_iso_date(date(2018, 12, 30)),
    ///     YearWeek::iso(2018, 52),
    /// );
    /// assert_eq!(
    ///     YearWeek::from_iso_date(date(2018, 12, 31)),
    ///     YearWeek::iso(2019, 1),
    /// );
    /// ```
    #[inline]
    pub fn from_iso_date(date: Date) -> YearWeek {
        YearWeek::from_date(date, WeekDefinition::ISO)
    }

    /// Returns the week-based year.
    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    /// Returns the week number. For a valid year-week, this is in the range
    /// `1..=52` or `1..=53`.
    #[inline]
    pub fn week(self) -> i8 {
        self.week
    }

    /// Returns the definition of a week used by this year-week.
    #[inline]
    pub fn definition(self) -> WeekDefinition {
        self.definition
    }

    /// Returns the number of weeks, either `52` or `53`, in this year-week's
    /// week-based year.
    ///
    /// This is a convenience routine for
    /// `self.definition().weeks_in_year(self.year())`.
    ///
    /// # Errors
    ///
    /// This returns an error when January 1st of the week-based year is
    /// outside of the range of dates supported by Jiff.
    #[inline]
    pub fn weeks_in_year(self) -> Result<i8, Error> {
        self.definition.weeks_in_year(self.year)
    }

    /// Returns this year-week unchanged if its week number is one that its
    /// week definition can produce for its week-based year.
    ///
    /// # Errors
    ///
    /// This returns an error when the week is not in the range
    /// `1..=weeks_in_year`, or when the week-based year is outside of the
    /// range supported by Jiff.
    ///
    /// # Example
    ///
    /// ```
    /// use yearweek::YearWeek;
    ///
    /// assert!(YearWeek::iso(2020, 53).validate().is_ok());
    /// assert!(YearWeek::iso(2019, 53).validate().unwrap_err().is_range());
    /// assert!(YearWeek::iso(2019, 0).validate().is_err());
    /// ```
    pub fn validate(self) -> Result<YearWeek, Error> {
        let max = self.weeks_in_year()?;
        if !(1..=max).contains(&self.week) {
            debug!(
                "{yw} is invalid: week-based year has {max} weeks",
                yw = self,
            );
            return Err(E::WeekOutOfRange {
                year: self.year,
                week: self.week,
                max,
            }
            .into());
        }
        Ok(self)
    }

    /// Returns true if and only if [`YearWeek::validate`] succeeds.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the date of the given weekday within this week.
    ///
    /// The date returned may be in a calendar year other than this
    /// year-week's week-based year.
    ///
    /// For every date `d` and week definition `def`, the date returned by
    /// `YearWeek::from_date(d, def).at_day(w)` is in the same week as `d`
    /// for every weekday `w`. In particular, using the first weekday of
    /// `def` returns the first day of `d`'s week.
    ///
    /// # Errors
    ///
    /// This returns an error when this year-week is not valid (see
    /// [`YearWeek::validate`]). That is, a date in some other week is never
    /// returned. This also returns an error when the resulting date is
    /// outside of the range supported by Jiff.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::{date, Weekday};
    /// use yearweek::YearWeek;
    ///
    /// let yw = YearWeek::iso(2019, 1);
    /// assert_eq!(yw.at_day(Weekday::Monday)?, date(2018, 12, 31));
    /// assert_eq!(yw.at_day(Weekday::Sunday)?, date(2019, 1, 6));
    ///
    /// let yw = YearWeek::iso(2020, 53);
    /// assert_eq!(yw.at_day(Weekday::Monday)?, date(2020, 12, 28));
    /// assert_eq!(yw.at_day(Weekday::Friday)?, date(2021, 1, 1));
    ///
    /// // 2021 only has 52 ISO weeks.
    /// assert!(YearWeek::iso(2021, 53).at_day(Weekday::Monday).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn at_day(self, weekday: Weekday) -> Result<Date, Error> {
        self.at_day_impl(weekday).with_context(|| E::FailedResolveDate {
            year: self.year,
            week: self.week,
        })
    }

    fn at_day_impl(self, weekday: Weekday) -> Result<Date, Error> {
        let jan1 = Date::new(self.year, 1, 1).map_err(Error::calendar)?;
        let layout =
            self.definition.layout(jan1.weekday(), jan1.days_in_year());
        if !(1..=layout.weeks).contains(&self.week) {
            debug!(
                "rejecting {yw}: week-based year has {max} weeks",
                yw = self,
                max = layout.weeks,
            );
            return Err(E::WeekOutOfRange {
                year: self.year,
                week: self.week,
                max: layout.weeks,
            }
            .into());
        }
        let day = layout.start
            + 7 * (i16::from(self.week) - 1)
            + self.definition.offset(weekday);
        jan1.checked_add(Span::new().days(day - 1)).map_err(Error::calendar)
    }

    /// Returns the first date in this week.
    ///
    /// This is a convenience routine for
    /// `self.at_day(self.definition().first_weekday())`.
    ///
    /// # Errors
    ///
    /// This returns an error in the same cases as [`YearWeek::at_day`].
    #[inline]
    pub fn first_date(self) -> Result<Date, Error> {
        self.at_day(self.definition.first_weekday())
    }

    /// Returns the last date in this week.
    ///
    /// This is a convenience routine for
    /// `self.at_day(self.definition().last_weekday())`.
    ///
    /// # Errors
    ///
    /// This returns an error in the same cases as [`YearWeek::at_day`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use yearweek::{WeekDefinition, YearWeek};
    ///
    /// let yw = YearWeek::new(2024, 1, WeekDefinition::SUNDAY_START);
    /// assert_eq!(yw.first_date()?, date(2023, 12, 31));
    /// assert_eq!(yw.last_date()?, date(2024, 1, 6));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn last_date(self) -> Result<Date, Error> {
        self.at_day(self.definition.last_weekday())
    }

    /// Returns an iterator over the seven consecutive dates in this week,
    /// starting with [`YearWeek::first_date`].
    ///
    /// # Errors
    ///
    /// This returns an error in the same cases as [`YearWeek::at_day`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::{date, Date};
    /// use yearweek::YearWeek;
    ///
    /// let dates: Vec<Date> = YearWeek::iso(2020, 53).dates()?.collect();
    /// assert_eq!(dates, vec![
    ///     date(2020, 12, 28),
    ///     date(2020, 12, 29),
    ///     date(2020, 12, 30),
    ///     date(2020, 12, 31),
    ///     date(2021, 1, 1),
    ///     date(2021, 1, 2),
    ///     date(2021, 1, 3),
    /// ]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn dates(self) -> Result<WeekDates, Error> {
        // Check both ends so that the iterator itself never fails.
        let first = self.first_date()?;
        self.last_date()?;
        Ok(WeekDates { next: Some(first), remaining: 7 })
    }

    /// Returns the year-week, under a different week definition, of the
    /// first day of this week.
    ///
    /// # Errors
    ///
    /// This returns an error in the same cases as [`YearWeek::at_day`].
    ///
    /// # Example
    ///
    /// ```
    /// use yearweek::{WeekDefinition, YearWeek};
    ///
    /// // ISO week 2020-W53 starts on Monday 2020-12-28, which is in the
    /// // first week of 2021 when weeks start on Sunday.
    /// let yw = YearWeek::iso(2020, 53);
    /// assert_eq!(
    ///     yw.with_definition(WeekDefinition::SUNDAY_START)?,
    ///     YearWeek::new(2021, 1, WeekDefinition::SUNDAY_START),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_definition(
        self,
        definition: WeekDefinition,
    ) -> Result<YearWeek, Error> {
        Ok(YearWeek::from_date(self.first_date()?, definition))
    }
}

impl From<Date> for YearWeek {
    #[inline]
    fn from(date: Date) -> YearWeek {
        YearWeek::from_iso_date(date)
    }
}

/// Drops the weekday of an ISO 8601 week date.
///
/// # Example
///
/// ```
/// use jiff::civil::{ISOWeekDate, Weekday};
/// use yearweek::YearWeek;
///
/// let weekdate = ISOWeekDate::new(2020, 53, Weekday::Friday)?;
/// assert_eq!(YearWeek::from(weekdate), YearWeek::iso(2020, 53));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl From<ISOWeekDate> for YearWeek {
    #[inline]
    fn from(weekdate: ISOWeekDate) -> YearWeek {
        YearWeek::iso(weekdate.year(), weekdate.week())
    }
}

impl core::fmt::Display for YearWeek {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// An iterator over the dates of a single week.
///
/// This iterator is created by [`YearWeek::dates`].
#[derive(Clone, Debug)]
pub struct WeekDates {
    next: Option<Date>,
    remaining: u8,
}

impl Iterator for WeekDates {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.next?;
        self.remaining -= 1;
        self.next = date.tomorrow().ok();
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.remaining);
        (len, Some(len))
    }
}

impl ExactSizeIterator for WeekDates {}

impl core::iter::FusedIterator for WeekDates {}
