#![cfg(test)]

use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::collections::Queue;
use crate::error::ErrCode;
use crate::language::Symbol;
use crate::util::alloc::DropCounter;

#[test]
fn test_add_remove_order() {
    let mut stack = Stack::new();
    stack.add('a');
    stack.add('b');

    assert_eq!(stack.peek(), Some(&'b'));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.remove(), Some('b'));
    assert_eq!(stack.remove(), Some('a'));
    assert_eq!(stack.remove(), None, "An empty Stack should return None.");
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_peek_is_idempotent() {
    let stack: Stack<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(stack.peek(), Some(&3), "The last element is on top.");
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_clear() {
    let counter = DropCounter::new();
    let mut stack = Stack::new();
    for _ in 0..3 {
        stack.add(counter.token());
    }

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(counter.dropped(), 3, "Clearing should drop every element.");
}

#[test]
fn test_exports() {
    let bottom = Rc::new(String::from("bottom"));
    let mut stack = Stack::new();
    stack.add(Rc::clone(&bottom));
    stack.add(Rc::new(String::from("top")));

    let shallow = stack.to_array_shallow();
    assert_eq!(shallow.len(), 2);
    assert!(Rc::ptr_eq(&shallow[0], &bottom), "Bottom comes first.");

    let deep = stack.to_array_deep().expect("Strings can be deep cloned.");
    assert_eq!(deep, shallow);
    assert!(!Rc::ptr_eq(&deep[0], &bottom));
}

#[test]
fn test_to_array_deep_failure() {
    let mut stack = Stack::new();
    stack.add((1, Symbol::anonymous()));

    let err = stack.to_array_deep().expect_err("Symbol copy fails.");
    assert_eq!(err.kind(), ErrCode::DeepCopyFailed);
    assert_eq!(err.message(), "Deep copying stack elements failed.");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_display_and_iter() {
    let stack: Stack<&str> = ["a", "b", "c"].into_iter().collect();

    assert_eq!(stack.to_string(), "a,b,c");
    let reversed: Vec<_> = stack.iter().rev().copied().collect();
    assert_eq!(reversed, ["c", "b", "a"]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn test_is_stack() {
    assert!(Stack::<char>::is_stack(&Stack::<char>::new()));
    assert!(!Stack::<char>::is_stack(&Queue::<char>::new()));
    assert!(!Stack::<char>::is_stack(&['a']));
}

proptest! {
    #[test]
    fn prop_lifo_order(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut stack = Stack::new();
        for value in &values {
            stack.add(*value);
        }

        let mut removed = Vec::new();
        while let Some(value) = stack.remove() {
            removed.push(value);
        }
        removed.reverse();
        prop_assert_eq!(removed, values);
    }
}
