#![cfg(test)]

use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::collections::Stack;
use crate::error::{ErrCode, PreviousError};
use crate::language::Symbol;
use crate::util::alloc::DropCounter;

#[test]
fn test_add_remove_order() {
    let mut queue = Queue::new();
    queue.add(1);
    queue.add(2);

    assert_eq!(queue.remove(), Some(1));
    assert_eq!(queue.remove(), Some(2));
    assert_eq!(queue.remove(), None, "An empty Queue should return None.");
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_peek() {
    let mut queue: Queue<&str> = Queue::new();
    assert_eq!(queue.peek(), None);

    queue.add("head");
    queue.add("tail");
    assert_eq!(queue.peek(), Some(&"head"));
    assert_eq!(queue.peek(), Some(&"head"), "Peeking doesn't remove.");
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_option_elements() {
    let mut queue: Queue<Option<i32>> = Queue::new();
    queue.add(None);

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.remove(), Some(None), "A stored None isn't empty.");
    assert_eq!(queue.remove(), None);
}

#[test]
fn test_clear() {
    let counter = DropCounter::new();
    let mut queue: Queue<_> = (0..5).map(|_| counter.token()).collect();
    assert_eq!(queue.len(), 5);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(counter.dropped(), 5, "Clearing should drop every element.");

    queue.add(counter.token());
    assert_eq!(queue.len(), 1, "A cleared Queue should remain usable.");
}

#[test]
fn test_to_array_shallow() {
    let first = Rc::new(vec![1, 2]);
    let second = Rc::new(vec![3]);
    let mut queue = Queue::new();
    queue.add(Rc::clone(&first));
    queue.add(Rc::clone(&second));

    let array = queue.to_array_shallow();
    assert_eq!(array, [Rc::clone(&first), Rc::clone(&second)]);
    assert!(Rc::ptr_eq(&array[0], &first), "Shallow copies share.");
    assert!(Rc::ptr_eq(&array[1], &second));
    assert_eq!(queue.len(), 2, "Exporting shouldn't consume the Queue.");
}

#[test]
fn test_to_array_deep() {
    let element = Rc::new(vec![1, 2]);
    let mut queue = Queue::new();
    queue.add(Rc::clone(&element));

    let array = queue.to_array_deep().expect("Integers can be deep cloned.");
    assert_eq!(array, [Rc::new(vec![1, 2])]);
    assert!(!Rc::ptr_eq(&array[0], &element), "Copies don't share.");
}

#[test]
fn test_to_array_deep_failure() {
    let mut queue = Queue::new();
    queue.add(Some(Symbol::new("first")));
    queue.add(None);

    let err = queue.to_array_deep().expect_err("Symbol copy fails.");
    assert_eq!(err.kind(), ErrCode::DeepCopyFailed);
    assert_eq!(err.message(), "Deep copying queue elements failed.");
    assert_eq!(err.arguments::<()>(), Some(&()));
    assert!(
        matches!(err.previous_error(), Some(PreviousError::DataClone(_))),
        "The clone error should be kept."
    );
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_display() {
    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(queue.to_string(), "1,2,3");
    assert_eq!(Queue::<i32>::new().to_string(), "");
}

#[test]
fn test_is_queue() {
    assert!(Queue::<i32>::is_queue(&Queue::<i32>::new()));
    assert!(!Queue::<i32>::is_queue(&Queue::<u8>::new()));
    assert!(!Queue::<i32>::is_queue(&Stack::<i32>::new()));
    assert!(!Queue::<i32>::is_queue(&Vec::<i32>::new()));
    assert!(!Queue::<i32>::is_queue(&()));
}

#[test]
fn test_iter_and_extend() {
    let mut queue: Queue<i32> = [1, 2].into_iter().collect();
    queue.extend([3, 4]);

    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(queue.iter().len(), 4);
    assert_eq!((&queue).into_iter().next_back(), Some(&4));
    assert_eq!(queue.clone().into_iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(
        format!("{queue:?}"),
        "Queue { elements: [1, 2, 3, 4], len: 4 }"
    );
}

proptest! {
    #[test]
    fn prop_fifo_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut queue = Queue::new();
        for value in &values {
            queue.add(*value);
        }

        let mut removed = Vec::new();
        while let Some(value) = queue.remove() {
            removed.push(value);
        }
        prop_assert_eq!(removed, values);
    }

    #[test]
    fn prop_length_tracks_operations(ops in prop::collection::vec(any::<Option<u8>>(), 0..128)) {
        let mut queue = Queue::new();
        let mut expected = 0_usize;

        for op in ops {
            match op {
                Some(value) => {
                    queue.add(value);
                    expected += 1;
                },
                None => {
                    if queue.remove().is_some() {
                        expected -= 1;
                    }
                },
            }
            prop_assert_eq!(queue.len(), expected);
        }

        queue.clear();
        prop_assert_eq!(queue.len(), 0);
    }
}
