use std::any::Any;

use crate::error::{ErrCode, ErrorResult};
use crate::language::as_str;

/// Converts the strings `"true"` and `"false"` to the matching [`bool`]. Surrounding whitespace and
/// case are ignored, and a value that is already a `bool` is returned as is.
///
/// Any of the string types accepted by [`as_str`] can be converted.
///
/// # Errors
/// - [`ErrCode::WrongType`] if `value` is neither a string nor a `bool`.
/// - [`ErrCode::InvalidRange`] if `value` is a string other than `"true"` or `"false"`.
///
/// # Examples
/// ```
/// # use mjd_utils::convert::convert_string_bool;
/// assert_eq!(convert_string_bool(&" TRUE\n").ok(), Some(true));
/// assert_eq!(convert_string_bool(&String::from("False")).ok(), Some(false));
/// assert_eq!(convert_string_bool(&true).ok(), Some(true));
/// assert!(convert_string_bool(&"yes").is_err());
/// assert!(convert_string_bool(&1).is_err());
/// ```
pub fn convert_string_bool<V: Any + Clone>(value: &V) -> Result<bool, ErrorResult> {
    let value_any: &dyn Any = value;

    if let Some(&boolean) = value_any.downcast_ref::<bool>() {
        return Ok(boolean);
    }

    let Some(string) = as_str(value_any) else {
        let err = ErrorResult::type_error(ErrCode::WrongType, "Argument value must be a string.");
        return Err(err.with_arguments((value.clone(),)));
    };

    match string.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ErrorResult::range_error(
            ErrCode::InvalidRange,
            "Argument value was not string 'true' or string 'false'.",
        )
        .with_arguments((value.clone(),))),
    }
}
