/*!
A collection of calendar related utility functions.

Nearly all calendar arithmetic is delegated to Jiff. The exception is the
length of a year, which is sometimes needed for a year just outside of the
range of dates that Jiff supports. (For example, the year before
`-9999-01-01`, which may contain the start of that date's week.)
*/

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
///
/// This works for any `i16`, including years outside of Jiff's supported
/// range.
#[inline]
pub(crate) const fn is_leap_year(year: i16) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given year.
#[inline]
pub(crate) const fn days_in_year(year: i16) -> i16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}
