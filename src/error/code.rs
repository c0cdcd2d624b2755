use derive_more::{Display, IsVariant};

/// The closed set of failure categories used across the crate. The same tag is available both as
/// [`ErrorResult::kind`](super::ErrorResult::kind) and in the error's
/// [`ErrorCause`](super::ErrorCause) for introspection.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ErrCode {
    /// An argument wasn't of the expected category.
    #[display("WrongType")]
    WrongType,
    /// A numeric argument was NaN.
    #[display("NaN")]
    NaN,
    /// A numeric argument was outside of the accepted range.
    #[display("InvalidRange")]
    InvalidRange,
    /// A collection query was made against a collection with no elements.
    #[display("EmptyCollection")]
    EmptyCollection,
    /// A collection query landed on an empty slot.
    #[display("EmptySlot")]
    EmptySlot,
    /// Recursively copying a collection's contents failed.
    #[display("DeepCopyFailed")]
    DeepCopyFailed,
    /// Division by zero was requested.
    #[display("ZeroDivision")]
    ZeroDivision,
    /// An internal step failed in a way that shouldn't be possible.
    #[display("Unknown")]
    Unknown,
}

/// The family an [`ErrorResult`](super::ErrorResult) belongs to. Type problems are
/// [`TypeError`](ErrorName::TypeError)s, range problems are [`RangeError`](ErrorName::RangeError)s
/// and everything else is a plain [`Error`](ErrorName::Error).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ErrorName {
    #[display("Error")]
    Error,
    #[display("TypeError")]
    TypeError,
    #[display("RangeError")]
    RangeError,
}
