use jiff::civil::{Date, Weekday};

use crate::{
    error::{week::Error as E, Error, ErrorContext},
    util::common,
};

/// A definition of what a week is.
///
/// A week definition consists of two things:
///
/// * The weekday on which every week starts.
/// * The minimal number of days that the first week of a year must have in
/// that year in order to be considered week `1`. When the first partial week
/// of a calendar year has fewer days than this, those days instead belong to
/// the last week of the previous week-based year.
///
/// Together, these determine both the week number of any date and the
/// week-based year that week belongs to. The week-based year of a date is
/// not always equal to its calendar year. For example, under the
/// [ISO 8601 definition](WeekDefinition::ISO), `2018-12-31` is in the first
/// week of the week-based year `2019`.
///
/// # Default value
///
/// For convenience, this type implements the `Default` trait. Its default
/// value is [`WeekDefinition::ISO`].
///
/// # Example
///
/// ```
/// use jiff::civil::{date, Weekday};
/// use yearweek::{WeekDefinition, YearWeek};
///
/// // Weeks start on Saturday, and week 1 is the week with January 1st.
/// let def = WeekDefinition::new(Weekday::Saturday, 1)?;
/// let yw = YearWeek::from_date(date(2021, 1, 1), def);
/// assert_eq!((yw.year(), yw.week()), (2021, 1));
/// assert_eq!(yw.first_date()?, date(2020, 12, 26));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "WeekDefinitionRepr", try_from = "WeekDefinitionRepr")
)]
pub struct WeekDefinition {
    first_weekday: Weekday,
    minimal_days: i8,
}

impl WeekDefinition {
    /// The ISO 8601 week definition.
    ///
    /// Weeks start on Monday, and the first week of a year must contain at
    /// least 4 days of that year. Equivalently, week 1 is the week containing
    /// the year's first Thursday, or the week containing January 4th.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::Weekday;
    /// use yearweek::WeekDefinition;
    ///
    /// assert_eq!(WeekDefinition::ISO.first_weekday(), Weekday::Monday);
    /// assert_eq!(WeekDefinition::ISO.minimal_days(), 4);
    /// ```
    pub const ISO: WeekDefinition =
        WeekDefinition { first_weekday: Weekday::Monday, minimal_days: 4 };

    /// A week definition where weeks start on Sunday, and the first week of
    /// a year is the week containing January 1st.
    ///
    /// This is common in the United States.
    pub const SUNDAY_START: WeekDefinition =
        WeekDefinition { first_weekday: Weekday::Sunday, minimal_days: 1 };

    /// Creates a new week definition.
    ///
    /// # Errors
    ///
    /// This returns an error when `minimal_days` is not in the range
    /// `1..=7`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::Weekday;
    /// use yearweek::WeekDefinition;
    ///
    /// let def = WeekDefinition::new(Weekday::Monday, 4)?;
    /// assert_eq!(def, WeekDefinition::ISO);
    ///
    /// assert!(WeekDefinition::new(Weekday::Monday, 0).is_err());
    /// assert!(WeekDefinition::new(Weekday::Monday, 8).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(
        first_weekday: Weekday,
        minimal_days: i8,
    ) -> Result<WeekDefinition, Error> {
        if !(1..=7).contains(&minimal_days) {
            return Err(E::InvalidMinimalDays { given: minimal_days }.into());
        }
        Ok(WeekDefinition { first_weekday, minimal_days })
    }

    /// Returns the weekday on which every week starts.
    #[inline]
    pub fn first_weekday(self) -> Weekday {
        self.first_weekday
    }

    /// Returns the weekday on which every week ends.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::Weekday;
    /// use yearweek::WeekDefinition;
    ///
    /// assert_eq!(WeekDefinition::ISO.last_weekday(), Weekday::Sunday);
    /// assert_eq!(
    ///     WeekDefinition::SUNDAY_START.last_weekday(),
    ///     Weekday::Saturday,
    /// );
    /// ```
    #[inline]
    pub fn last_weekday(self) -> Weekday {
        self.first_weekday.wrapping_add(6i64)
    }

    /// Returns the minimal number of days, in `1..=7`, that the first week
    /// of a year must have within that year.
    #[inline]
    pub fn minimal_days(self) -> i8 {
        self.minimal_days
    }

    /// Returns the number of weeks, either `52` or `53`, in the given
    /// week-based year under this definition.
    ///
    /// # Errors
    ///
    /// This returns an error when January 1st of `year` is outside of the
    /// range of dates supported by Jiff.
    ///
    /// # Example
    ///
    /// ```
    /// use yearweek::WeekDefinition;
    ///
    /// assert_eq!(WeekDefinition::ISO.weeks_in_year(2019)?, 52);
    /// assert_eq!(WeekDefinition::ISO.weeks_in_year(2020)?, 53);
    /// assert_eq!(WeekDefinition::SUNDAY_START.weeks_in_year(2022)?, 53);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn weeks_in_year(self, year: i16) -> Result<i8, Error> {
        let jan1 = Date::new(year, 1, 1)
            .with_context(|| E::FailedWeeksInYear { year })?;
        Ok(self.layout(jan1.weekday(), jan1.days_in_year()).weeks)
    }

    /// Returns the number of days from the start of a week to the given
    /// weekday, in the range `0..=6`.
    #[inline]
    pub(crate) fn offset(self, weekday: Weekday) -> i16 {
        i16::from(weekday.since(self.first_weekday))
    }

    /// Returns the day of the year (with January 1st being `1`) on which
    /// week `1` starts, for a year whose January 1st falls on `jan1`.
    ///
    /// The value returned is in the range `-5..=7`. Values less than `1`
    /// refer to days at the end of the previous calendar year.
    fn week_one_start(self, jan1: Weekday) -> i16 {
        let offset = self.offset(jan1);
        if 7 - offset >= i16::from(self.minimal_days) {
            1 - offset
        } else {
            8 - offset
        }
    }

    /// Computes the week layout of a calendar year.
    ///
    /// This only requires the weekday of January 1st and the length of the
    /// year, which means it works even for years whose dates Jiff can't
    /// represent.
    pub(crate) fn layout(self, jan1: Weekday, days: i16) -> YearLayout {
        let start = self.week_one_start(jan1);
        let next_jan1 = jan1.wrapping_add(days);
        let next_start = days + self.week_one_start(next_jan1);
        // The distance between two consecutive week 1 starts is always
        // either 364 or 371 days.
        let weeks = ((next_start - start) / 7) as i8;
        YearLayout { start, next_start, weeks }
    }

    /// Computes the week layout of the calendar year before the one whose
    /// January 1st falls on `jan1`.
    pub(crate) fn previous_layout(
        self,
        jan1: Weekday,
        year: i16,
    ) -> YearLayout {
        let days = common::days_in_year(year - 1);
        self.layout(jan1.wrapping_add(-days), days)
    }
}

impl Default for WeekDefinition {
    fn default() -> WeekDefinition {
        WeekDefinition::ISO
    }
}

/// The positions of week-based years relative to a single calendar year.
///
/// All positions are days of the calendar year, with January 1st being `1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct YearLayout {
    /// The first day of week `1` of the week-based year with the same number
    /// as the calendar year.
    pub(crate) start: i16,
    /// The first day of week `1` of the following week-based year.
    pub(crate) next_start: i16,
    /// The number of weeks in the week-based year. Always `52` or `53`.
    pub(crate) weeks: i8,
}

/// The serialized form of a [`WeekDefinition`].
///
/// Weekdays are serialized as an integer where Monday is `1` and Sunday is
/// `7`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WeekDefinitionRepr {
    first_weekday: i8,
    minimal_days: i8,
}

#[cfg(feature = "serde")]
impl From<WeekDefinition> for WeekDefinitionRepr {
    fn from(def: WeekDefinition) -> WeekDefinitionRepr {
        WeekDefinitionRepr {
            first_weekday: def.first_weekday.to_monday_one_offset(),
            minimal_days: def.minimal_days,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<WeekDefinitionRepr> for WeekDefinition {
    type Error = Error;

    fn try_from(repr: WeekDefinitionRepr) -> Result<WeekDefinition, Error> {
        let first_weekday = Weekday::from_monday_one_offset(repr.first_weekday)
            .map_err(Error::calendar)?;
        WeekDefinition::new(first_weekday, repr.minimal_days)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for WeekDefinition {
    fn arbitrary(g: &mut quickcheck::Gen) -> WeekDefinition {
        let first_weekday = *g
            .choose(&[
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Saturday,
                Weekday::Sunday,
            ])
            .unwrap();
        let minimal_days = *g.choose(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        WeekDefinition { first_weekday, minimal_days }
    }
}
