use alloc::sync::Arc;

pub(crate) mod week;

/// An error that can occur in this crate.
///
/// Errors come from a small number of places:
///
/// * An invalid week definition. (For example, asking for a first week that
/// must contain `0` or `8` days.)
/// * A week number that the week definition cannot produce for a particular
/// week-based year. (For example, `2019-W53` under the ISO definition.)
/// * A failure in the underlying calendar engine, which is usually a
/// result of a date falling outside of the supported range of
/// `-9999-01-01` through `9999-12-31`.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides very limited
/// introspection capabilities. The predicates [`Error::is_range`] and
/// [`Error::is_invalid_parameter`] cover the errors this crate produces
/// itself.
///
/// # Design
///
/// Only one error type exists for every fallible operation in this crate.
/// Contextual information (like which year-week was being resolved) is
/// attached as a chain of causes and rendered by the `Display` impl as
/// `consequent: cause`.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and to keep
    /// its size equal to one word.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use yearweek::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of a value being
    /// out of its supported range.
    ///
    /// This includes week numbers that a week definition cannot produce for
    /// a given week-based year, as well as dates outside of the range
    /// supported by the calendar engine.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::Weekday;
    /// use yearweek::YearWeek;
    ///
    /// // 2019 only has 52 ISO weeks.
    /// let err = YearWeek::iso(2019, 53).at_day(Weekday::Monday).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::{week::Error as WeekError, ErrorKind::*};

        matches!(
            *self.root().kind(),
            Week(WeekError::WeekOutOfRange { .. }) | Calendar(_)
        )
    }

    /// Returns true when this error originated as a result of an invalid
    /// configuration of parameters to a function call.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::Weekday;
    /// use yearweek::WeekDefinition;
    ///
    /// let err = WeekDefinition::new(Weekday::Monday, 8).unwrap_err();
    /// assert!(err.is_invalid_parameter());
    /// ```
    pub fn is_invalid_parameter(&self) -> bool {
        use self::{week::Error as WeekError, ErrorKind::*};

        matches!(
            *self.root().kind(),
            Week(WeekError::InvalidMinimalDays { .. })
        )
    }
}

impl Error {
    /// Wraps an error from the calendar engine.
    #[inline(never)]
    #[cold]
    pub(crate) fn calendar(err: jiff::Error) -> Error {
        Error::from(ErrorKind::Calendar(err))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let inner = Arc::try_unwrap(consequent.inner);
        let ErrorInner { kind, cause } = match inner {
            Ok(inner) => inner,
            // A shared consequent can't be mutated, so its kind is
            // re-wrapped as an ad hoc message instead.
            Err(shared) => ErrorInner {
                kind: ErrorKind::Adhoc(AdhocError::from_args(format_args!(
                    "{}",
                    shared.kind
                ))),
                cause: shared.cause.clone(),
            },
        };
        assert!(cause.is_none(), "cause of consequence must be `None`");
        Error { inner: Arc::new(ErrorInner { kind, cause: Some(self) }) }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Calendar(jiff::Error),
    Week(self::week::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => core::fmt::Display::fmt(msg, f),
            Calendar(ref err) => core::fmt::Display::fmt(err, f),
            Week(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits callers
/// to manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `ErrorContext::with_context` work
/// without needing to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for jiff::Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        Error::calendar(self)
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the consequent error returned by the closure with this
    /// (`self`) error as the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    /// The closure avoids paying the cost of contextual error creation in
    /// the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
