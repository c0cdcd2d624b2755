#![cfg(test)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::*;
use crate::language::Symbol;

#[test]
fn test_deep_clone_allocates_new_pointees() {
    let shared = Rc::new(vec![String::from("a"), String::from("b")]);
    let copy = shared.deep_clone().expect("Strings are cloneable.");

    assert_eq!(copy, shared, "A deep clone should be structurally equal.");
    assert!(
        !Rc::ptr_eq(&copy, &shared),
        "A deep clone of an Rc shouldn't share the original allocation."
    );
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_deep_clone_nested_collections() {
    let mut map = BTreeMap::new();
    map.insert(String::from("age"), (42_u32, Some(String::from("Bob"))));
    let copy = map.deep_clone().expect("Plain data should be cloneable.");
    assert_eq!(copy, map);

    let hash_map: HashMap<u8, Box<f64>> = HashMap::from([(1, Box::new(1.5))]);
    assert_eq!(hash_map.deep_clone(), Ok(hash_map.clone()));
}

#[test]
fn test_deep_clone_symbol_fails() {
    let symbol = Symbol::new("sym");
    let err = symbol.deep_clone().expect_err("Symbols aren't cloneable.");
    assert!(err.type_name().ends_with("Symbol"));

    let values = vec![(Symbol::anonymous(), 1)];
    assert!(
        values.deep_clone().is_err(),
        "A single uncloneable component should fail the whole copy."
    );
    assert!(Some(Symbol::anonymous()).deep_clone().is_err());
    assert_eq!(None::<Symbol>.deep_clone(), Ok(None));
}

#[test]
fn test_deep_clone_borrowed_cell() {
    let cell = RefCell::new(vec![1, 2, 3]);
    let copy = cell.deep_clone().map(RefCell::into_inner);
    assert_eq!(copy, Ok(vec![1, 2, 3]));

    let guard = cell.borrow_mut();
    assert!(
        cell.deep_clone().is_err(),
        "A mutably borrowed cell can't be read, so it can't be copied."
    );
    drop(guard);
}
