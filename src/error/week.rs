use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedResolveDate { year: i16, week: i8 },
    FailedWeeksInYear { year: i16 },
    InvalidMinimalDays { given: i8 },
    WeekOutOfRange { year: i16, week: i8, max: i8 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Week(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            FailedResolveDate { year, week } => write!(
                f,
                "failed to resolve week {week} of week-based year {year} \
                 to a date",
            ),
            FailedWeeksInYear { year } => write!(
                f,
                "failed to determine the number of weeks \
                 in week-based year {year}",
            ),
            InvalidMinimalDays { given } => write!(
                f,
                "minimal days in first week must be in the range 1..=7, \
                 but got {given}",
            ),
            WeekOutOfRange { year, week, max } => write!(
                f,
                "week {week} is not in the required range of 1..={max} \
                 for week-based year {year}",
            ),
        }
    }
}
