//! Snapshot copies, rebuilding and structural equality

mod common;

use std::collections::HashSet;

use common::*;
use elastic_list::{ArrayList, ListError};

#[test]
fn test_to_vec_returns_live_elements() {
    let list = list_with_capacity(1000, [Some(1), None, Some(2), Some(3)]);
    assert_eq!(list.to_vec(), vec![Some(1), None, Some(2), Some(3)]);
}

#[test]
fn test_to_vec_empty() {
    let list: ArrayList<i32> = ArrayList::new();
    assert!(list.to_vec().is_empty());
}

#[test]
fn test_to_array_in_copies_into_large_destination() {
    let list = list_with_capacity(10, [1, 2, 3, 4]);
    let result = list.to_array_in(vec![None::<i32>; 6]).unwrap();
    assert_eq!(result, vec![Some(1), Some(2), Some(3), Some(4), None, None]);
}

#[test]
fn test_to_array_in_clears_trailing_slots() {
    let list = list_with_capacity(10, [1, 2]);
    let result = list.to_array_in(vec![Some(7); 4]).unwrap();
    assert_eq!(result, vec![Some(1), Some(2), None, None]);
}

#[test]
fn test_to_array_in_allocates_when_destination_small() {
    let list = list_with_capacity(10, [1, 2, 3, 4]);
    let result = list.to_array_in(vec![None::<i64>; 2]).unwrap();
    assert_eq!(result, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn test_to_array_in_type_mismatch() {
    let list = list_with_capacity(10, [1i32, -2, 3]);
    let err = list.to_array_in(vec![None::<u32>; 6]).unwrap_err();
    assert_eq!(err, ListError::TypeMismatch { index: 1 });
}

#[test]
fn test_rebuilt_list_equals_original() {
    let original = list_with_capacity(3, ["b", "a", "c", "a"]);
    let rebuilt: ArrayList<_> = original.to_vec().into_iter().collect();
    assert_eq!(rebuilt, original);
    assert_eq!(rebuilt.hash_code(), original.hash_code());
    assert_ne!(rebuilt.capacity(), original.capacity());
}

#[test]
fn test_equal_even_when_capacities_differ() {
    let a = list_with_capacity(100, [2, 3, 4]);
    let b = list_with_capacity(1000, [2, 3, 4]);
    let c = list_with_capacity(10, [4, 3, 2]);

    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_ne!(b, c);
    assert_ne!(b.hash_code(), c.hash_code());
}

#[test]
fn test_lists_as_set_keys() {
    let mut seen = HashSet::new();
    seen.insert(list_with_capacity(4, ["x", "y"]));
    assert!(seen.contains(&list_with_capacity(64, ["x", "y"])));
    assert!(!seen.contains(&list_with_capacity(4, ["y", "x"])));
}
