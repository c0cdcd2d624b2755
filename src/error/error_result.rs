use std::any::{self, Any};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};
use tracing::trace;

use super::{ErrCode, ErrorName};
use crate::clone::DataCloneError;

/// The error type returned by every fallible operation in this crate.
///
/// An ErrorResult is never partially filled in by a failing operation: validation happens before
/// any work does, and the error records the arguments exactly as they were received.
#[derive(Debug)]
pub struct ErrorResult {
    name: ErrorName,
    message: String,
    cause: ErrorCause,
}

/// The structured payload of an [`ErrorResult`].
#[derive(Debug)]
pub struct ErrorCause {
    /// The same tag as [`ErrorResult::kind`].
    pub code: ErrCode,
    /// The lower-level failure this error wraps, or [`None`] if this is the root cause.
    pub previous_error: Option<PreviousError>,
    /// The arguments of the failing call. Argument-less operations store `()`.
    pub arguments: Option<Arguments>,
}

/// A lower-level failure wrapped by an [`ErrorResult`].
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum PreviousError {
    DataClone(DataCloneError),
    Result(Box<ErrorResult>),
}

impl From<ErrorResult> for PreviousError {
    fn from(value: ErrorResult) -> Self {
        PreviousError::Result(Box::new(value))
    }
}

/// The argument tuple of a failed call, kept as its original type.
pub struct Arguments {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl ErrorResult {
    /// Creates a new ErrorResult with no previous error and no recorded arguments.
    pub fn new(code: ErrCode, name: ErrorName, message: impl Into<String>) -> ErrorResult {
        let message = message.into();
        trace!(%code, %name, %message, "constructed error result");

        ErrorResult {
            name,
            message,
            cause: ErrorCause {
                code,
                previous_error: None,
                arguments: None,
            },
        }
    }

    /// Shorthand for an [`ErrorName::Error`].
    pub fn error(code: ErrCode, message: impl Into<String>) -> ErrorResult {
        ErrorResult::new(code, ErrorName::Error, message)
    }

    /// Shorthand for an [`ErrorName::TypeError`].
    pub fn type_error(code: ErrCode, message: impl Into<String>) -> ErrorResult {
        ErrorResult::new(code, ErrorName::TypeError, message)
    }

    /// Shorthand for an [`ErrorName::RangeError`].
    pub fn range_error(code: ErrCode, message: impl Into<String>) -> ErrorResult {
        ErrorResult::new(code, ErrorName::RangeError, message)
    }

    /// Records the arguments that led to this error. Use a tuple, even for a single argument, so
    /// that every call site stores the same shape.
    pub fn with_arguments<A: Any>(mut self, arguments: A) -> ErrorResult {
        self.cause.arguments = Some(Arguments::new(arguments));
        self
    }

    /// Records the failure that caused this one.
    pub fn with_previous(mut self, previous: impl Into<PreviousError>) -> ErrorResult {
        self.cause.previous_error = Some(previous.into());
        self
    }

    /// Returns the failure category of this error.
    pub const fn kind(&self) -> ErrCode {
        self.cause.code
    }

    /// Returns the failure category of this error. Identical to [`kind`](ErrorResult::kind).
    pub const fn code(&self) -> ErrCode {
        self.cause.code
    }

    pub const fn name(&self) -> ErrorName {
        self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn cause(&self) -> &ErrorCause {
        &self.cause
    }

    pub const fn previous_error(&self) -> Option<&PreviousError> {
        self.cause.previous_error.as_ref()
    }

    /// Returns the recorded arguments if they were recorded with exactly the type `A`.
    pub fn arguments<A: Any>(&self) -> Option<&A> {
        self.cause.arguments.as_ref()?.downcast_ref()
    }
}

impl Display for ErrorResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl Error for ErrorResult {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.cause.previous_error.as_ref()? {
            PreviousError::DataClone(err) => Some(err),
            PreviousError::Result(err) => Some(&**err),
        }
    }
}

impl Arguments {
    pub fn new<A: Any>(arguments: A) -> Arguments {
        Arguments {
            value: Box::new(arguments),
            type_name: any::type_name::<A>(),
        }
    }

    pub fn is<A: Any>(&self) -> bool {
        (*self.value).is::<A>()
    }

    pub fn downcast_ref<A: Any>(&self) -> Option<&A> {
        (*self.value).downcast_ref::<A>()
    }

    /// The name of the type the arguments were recorded as, intended for diagnostics only.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Debug for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Arguments")
            .field(&format_args!("{}", self.type_name))
            .finish()
    }
}
