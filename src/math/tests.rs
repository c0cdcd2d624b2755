#![cfg(test)]

use std::collections::VecDeque;

use super::*;
use crate::array::Sparse;
use crate::error::{ErrCode, ErrorName, PreviousError};

#[test]
fn test_add() {
    assert_eq!(add(2.0, 3.5).ok(), Some(5.5));
    assert_eq!(add(-2.0, 2.0).ok(), Some(0.0));
    let total = add(f64::MAX, f64::MAX);
    assert_eq!(total.ok(), Some(f64::INFINITY), "add doesn't clamp.");

    let err = add(f64::NAN, 1.0).expect_err("NaN should be rejected.");
    assert_eq!(err.kind(), ErrCode::NaN);
    assert_eq!(err.name(), ErrorName::Error);
    assert!(err.previous_error().is_none());
    let arguments = err.arguments::<(f64, f64)>();
    assert!(arguments.is_some_and(|(a, b)| a.is_nan() && *b == 1.0));
}

#[test]
fn test_subtract() {
    let cases = [
        (4.0, 2.0, 2.0),
        (2.0, 4.0, -2.0),
        (-2.0, -5.0, 3.0),
        (7.0, 0.0, 7.0),
        (0.0, 7.0, -7.0),
    ];
    for (minuend, subtrahend, expected) in cases {
        assert_eq!(subtract(minuend, subtrahend).ok(), Some(expected));
    }

    assert_eq!(subtract(-f64::MAX, f64::MAX).ok(), Some(-f64::MAX));
    assert_eq!(
        subtract(f64::INFINITY, 1.0).ok(),
        Some(f64::MAX),
        "Infinite arguments should be clamped first."
    );
    assert_eq!(subtract(f64::INFINITY, f64::INFINITY).ok(), Some(0.0));

    for (minuend, subtrahend) in [(f64::NAN, 3.0), (3.0, f64::NAN)] {
        let err = subtract(minuend, subtrahend).expect_err("NaN should be rejected.");
        assert_eq!(err.kind(), ErrCode::NaN);
        assert_eq!(err.name(), ErrorName::RangeError);
    }
}

#[test]
fn test_divide() {
    assert_eq!(divide(9.0, 3.0).ok(), Some(3.0));
    assert_eq!(divide(1.0, -4.0).ok(), Some(-0.25));
    assert_eq!(divide(f64::MAX, 0.5).ok(), Some(f64::MAX));
    assert_eq!(divide(f64::NEG_INFINITY, 1.0).ok(), Some(-f64::MAX));

    for divisor in [0.0, -0.0] {
        let err = divide(5.0, divisor).expect_err("Division by zero should be rejected.");
        assert_eq!(err.kind(), ErrCode::ZeroDivision);
        assert_eq!(err.name(), ErrorName::RangeError);
        assert_eq!(err.arguments::<(f64, f64)>(), Some(&(5.0, divisor)));
    }

    let err = divide(f64::NAN, 0.0).expect_err("NaN should be rejected.");
    assert_eq!(err.kind(), ErrCode::NaN, "NaN is checked first.");
}

#[test]
fn test_sum() {
    assert_eq!(sum(&[1.0, 2.0, 3.5]).ok(), Some(6.5));
    assert_eq!(sum::<[f64]>(&[]).ok(), Some(0.0));
    assert_eq!(
        sum(&[f64::MAX, f64::MAX, -f64::MAX]).ok(),
        Some(0.0),
        "The running total should be clamped after each step."
    );
    assert_eq!(sum(&[f64::INFINITY]).ok(), Some(f64::MAX));

    let deque: VecDeque<f64> = [1.0, 1.0].into();
    assert_eq!(sum(&deque).ok(), Some(2.0));

    let holes: Sparse<f64> = vec![None, Some(4.0), None].into();
    assert_eq!(sum(&holes).ok(), Some(4.0));
    assert_eq!(sum(&Sparse::<f64>::with_len(3)).ok(), Some(0.0));

    let err = sum(&[1.0, f64::NAN]).expect_err("NaN elements should be rejected.");
    assert_eq!(err.kind(), ErrCode::NaN);
    assert_eq!(err.name(), ErrorName::Error);
    assert_eq!(
        err.message(),
        "The element at index 1 was NaN. Execution stopped."
    );
    assert!(err.arguments::<(Vec<f64>,)>().is_some());
}

#[test]
fn test_product_and_multiply() {
    assert_eq!(product(&[2.0, 3.0, 4.0]).ok(), Some(24.0));
    assert_eq!(multiply(&[2.0, 3.0, 4.0]).ok(), Some(24.0));

    assert_eq!(product::<[f64]>(&[]).ok(), Some(1.0));
    assert_eq!(multiply::<[f64]>(&[]).ok(), Some(0.0));
    assert_eq!(product(&Sparse::<f64>::with_len(2)).ok(), Some(1.0));
    assert_eq!(multiply(&Sparse::<f64>::with_len(2)).ok(), Some(0.0));

    assert_eq!(product(&[f64::INFINITY]).ok(), Some(f64::MAX));
    assert_eq!(
        multiply(&[f64::INFINITY]).ok(),
        Some(f64::INFINITY),
        "multiply should use its first element as is."
    );
    assert_eq!(multiply(&[f64::MAX, 2.0]).ok(), Some(f64::MAX));

    let err = multiply(&[3.0, f64::NAN]).expect_err("NaN elements should be rejected.");
    assert_eq!(
        err.message(),
        "The element at index 1 was NaN. Execution stopped."
    );
}

#[test]
fn test_indeterminate_totals() {
    for err in [
        product(&[0.0, f64::INFINITY]).expect_err("0 * inf is NaN."),
        multiply(&[f64::INFINITY, 0.0]).expect_err("inf * 0 is NaN."),
        mean(&[f64::INFINITY, f64::NEG_INFINITY]).expect_err("inf - inf is NaN."),
    ] {
        assert_eq!(err.kind(), ErrCode::Unknown);
        match err.previous_error() {
            Some(PreviousError::Result(inner)) => assert_eq!(inner.kind(), ErrCode::NaN),
            other => panic!("Expected the clamping error to be kept, found {other:?}"),
        }
    }
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).ok(), Some(2.5));
    assert_eq!(mean::<[f64]>(&[]).ok(), Some(0.0));
    assert_eq!(mean(&Sparse::<f64>::with_len(4)).ok(), Some(0.0));
    assert_eq!(mean(&[f64::MAX, f64::MAX]).ok(), Some(f64::MAX / 2.0));

    let holes: Sparse<f64> = vec![Some(3.0), None, None, Some(5.0)].into();
    assert_eq!(mean(&holes).ok(), Some(4.0), "Holes aren't values.");

    let err = mean(&[f64::NAN]).expect_err("NaN elements should be rejected.");
    assert_eq!(err.kind(), ErrCode::NaN);
    assert_eq!(
        err.message(),
        "The element at index 0 was NaN. Execution stopped."
    );
}
