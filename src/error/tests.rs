#![cfg(test)]

use std::error::Error;

use super::*;
use crate::clone::DataCloneError;
use crate::language::Symbol;

#[test]
fn test_constructors() {
    let err = ErrorResult::new(ErrCode::EmptySlot, ErrorName::Error, "The slot was empty.");
    assert_eq!(err.kind(), ErrCode::EmptySlot);
    assert_eq!(err.code(), err.kind());
    assert_eq!(err.cause().code, ErrCode::EmptySlot);
    assert_eq!(err.name(), ErrorName::Error);
    assert_eq!(err.message(), "The slot was empty.");
    assert!(err.previous_error().is_none(), "New errors wrap nothing.");
    assert!(err.cause().arguments.is_none(), "No arguments yet.");

    assert!(ErrorResult::error(ErrCode::NaN, "").name().is_error());
    let type_error = ErrorResult::type_error(ErrCode::WrongType, "");
    assert!(type_error.name().is_type_error());
    let range_error = ErrorResult::range_error(ErrCode::InvalidRange, "");
    assert!(range_error.name().is_range_error());
}

#[test]
fn test_arguments() {
    let err = ErrorResult::error(ErrCode::EmptyCollection, "No elements.")
        .with_arguments((Vec::<String>::new(), 2.5_f64));

    assert_eq!(
        err.arguments::<(Vec<String>, f64)>(),
        Some(&(Vec::new(), 2.5))
    );
    assert_eq!(
        err.arguments::<(Vec<String>,)>(),
        None,
        "Downcasting to a different shape should fail."
    );
    assert_eq!(err.arguments::<(Vec<&str>, f64)>(), None);

    let arguments = err.cause().arguments.as_ref().expect("Recorded.");
    assert!(arguments.is::<(Vec<String>, f64)>());
    assert!(arguments.type_name().contains("f64"));

    let unit = ErrorResult::error(ErrCode::DeepCopyFailed, "").with_arguments(());
    assert_eq!(
        unit.arguments::<()>(),
        Some(&()),
        "Argument-less calls should record ()."
    );
}

#[test]
fn test_display() {
    let err = ErrorResult::range_error(ErrCode::ZeroDivision, "Cannot divide by 0.");
    assert_eq!(err.to_string(), "RangeError: Cannot divide by 0.");

    assert_eq!(ErrCode::DeepCopyFailed.to_string(), "DeepCopyFailed");
    assert_eq!(ErrorName::TypeError.to_string(), "TypeError");
}

#[test]
fn test_previous_error_chain() {
    let root = DataCloneError::of::<Symbol>();
    let middle = ErrorResult::error(ErrCode::DeepCopyFailed, "Deep copying failed.")
        .with_previous(root.clone());
    let outer = ErrorResult::error(ErrCode::Unknown, "Something failed.").with_previous(middle);

    let previous = outer.previous_error().expect("The middle error is kept.");
    let PreviousError::Result(middle) = previous else {
        panic!("Expected an ErrorResult, found {previous:?}");
    };
    assert_eq!(middle.kind(), ErrCode::DeepCopyFailed);
    let Some(PreviousError::DataClone(err)) = middle.previous_error() else {
        panic!("The middle error should wrap the clone error.");
    };
    assert_eq!(*err, root);

    let source = outer.source().expect("Wrapped errors are the source.");
    assert_eq!(source.to_string(), "Error: Deep copying failed.");
    let root_source = source.source().expect("The chain reaches the root.");
    assert_eq!(root_source.to_string(), root.to_string());
    assert!(root_source.source().is_none());
}

#[test]
fn test_previous_error_conversions() {
    let previous = PreviousError::from(DataCloneError::of::<u8>());
    assert!(previous.is_data_clone());
    let err: DataCloneError = previous.try_into().expect("It holds a DataCloneError.");
    assert_eq!(err.type_name(), "u8");

    let previous = PreviousError::from(ErrorResult::error(ErrCode::NaN, "NaN."));
    assert!(previous.is_result());
    assert!(DataCloneError::try_from(previous).is_err());
}
