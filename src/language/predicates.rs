use std::any::Any;
use std::borrow::Cow;
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;
use std::{fmt, io};

use crate::clone::DataCloneError;
use crate::error::{ErrorResult, PreviousError};

macro_rules! is_any_of {
    ($value:expr, $($t:ty),+ $(,)?) => {
        $($value.is::<$t>())||+
    };
}

/// Checks if a value is one of the primitive number types (integers up to 64 bits, `isize`,
/// `usize`, `f32` and `f64`).
///
/// NaN and the infinities are numbers too; use [`f64::is_finite`] to check finiteness.
pub fn is_number(value: &dyn Any) -> bool {
    is_any_of!(value, i8, i16, i32, i64, isize)
        || is_any_of!(value, u8, u16, u32, u64, usize)
        || is_any_of!(value, f32, f64)
}

/// Checks if a value is one of the 128-bit integer types.
pub fn is_big_int(value: &dyn Any) -> bool {
    is_any_of!(value, i128, u128)
}

/// Checks if a value is an owned or shared string type. See [`as_str`] for the accepted types.
pub fn is_string(value: &dyn Any) -> bool {
    as_str(value).is_some()
}

pub fn is_boolean(value: &dyn Any) -> bool {
    value.is::<bool>()
}

/// Checks if a value is the unit type, the nearest thing to an absent value that can be passed by
/// reference.
pub fn is_unit(value: &dyn Any) -> bool {
    value.is::<()>()
}

/// Checks if a value is one of this crate's error types, a boxed [`Error`] trait object or one of
/// the standard library's common concrete errors.
pub fn is_error(value: &dyn Any) -> bool {
    is_any_of!(
        value,
        ErrorResult,
        DataCloneError,
        PreviousError,
        Box<dyn Error>,
        Box<dyn Error + Send + Sync>,
        io::Error,
        fmt::Error,
    )
}

/// Views a value as a `&str` if it is a `String`, `&'static str`, `Box<str>`, `Rc<str>`,
/// `Arc<str>` or `Cow<'static, str>`.
pub fn as_str(value: &dyn Any) -> Option<&str> {
    if let Some(s) = value.downcast_ref::<String>() {
        Some(s)
    } else if let Some(s) = value.downcast_ref::<&'static str>() {
        Some(s)
    } else if let Some(s) = value.downcast_ref::<Box<str>>() {
        Some(s)
    } else if let Some(s) = value.downcast_ref::<Rc<str>>() {
        Some(s)
    } else if let Some(s) = value.downcast_ref::<Arc<str>>() {
        Some(s)
    } else {
        value.downcast_ref::<Cow<'static, str>>().map(|s| &**s)
    }
}
