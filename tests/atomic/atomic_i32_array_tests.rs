/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::{
    AtomicError,
    AtomicI32Array,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_new_zeroed() {
    let array = AtomicI32Array::new(5);
    assert_eq!(array.len(), 5);
    assert_eq!(array.to_vec(), vec![0; 5]);
}

#[test]
fn test_get_set_swap() {
    let array = AtomicI32Array::from_slice(&[1, 2, 3]);
    array.set(0, 10).unwrap();
    assert_eq!(array.get(0), Ok(10));
    assert_eq!(array.swap(1, 20), Ok(2));
    assert_eq!(array.get_and_set(1, 30), Ok(20));
    assert_eq!(array.to_vec(), vec![10, 30, 3]);
}

#[test]
fn test_compare_and_set() {
    let array = AtomicI32Array::new(5);
    assert_eq!(array.compare_and_set(2, 0, 1), Ok(true));
    assert_eq!(array.compare_and_set(2, 0, 2), Ok(false));
    assert_eq!(array.weak_compare_and_set(2, 1, 3), Ok(true));
    assert_eq!(array.get(2), Ok(3));
}

#[test]
fn test_arithmetic() {
    let array = AtomicI32Array::from_slice(&[10, 0]);
    assert_eq!(array.get_and_increment(0), Ok(10));
    assert_eq!(array.increment_and_get(0), Ok(12));
    assert_eq!(array.get_and_decrement(0), Ok(12));
    assert_eq!(array.decrement_and_get(0), Ok(10));
    assert_eq!(array.get_and_add(1, 5), Ok(0));
    assert_eq!(array.add_and_get(1, -7), Ok(-2));
    assert_eq!(array.to_vec(), vec![10, -2]);
}

#[test]
fn test_arithmetic_wraps() {
    let array = AtomicI32Array::from_slice(&[i32::MAX]);
    assert_eq!(array.increment_and_get(0), Ok(i32::MIN));
}

#[test]
fn test_out_of_range_index() {
    let array = AtomicI32Array::new(5);
    for index in [5, 6, usize::MAX] {
        let expected = Err(AtomicError::IndexOutOfRange { index, len: 5 });
        assert_eq!(array.get(index), expected);
        assert_eq!(array.swap(index, 1), expected);
        assert_eq!(array.increment_and_get(index), expected);
        assert_eq!(array.add_and_get(index, 3), expected);
        assert_eq!(
            array.compare_and_set(index, 0, 1),
            Err(AtomicError::IndexOutOfRange { index, len: 5 })
        );
    }
}

#[test]
fn test_try_from_source() {
    assert!(AtomicI32Array::try_from_source(Some(&[1, 2][..])).is_ok());
    assert_eq!(
        AtomicI32Array::try_from_source(None).err(),
        Some(AtomicError::InvalidArgument { name: "source" })
    );
}

#[test]
fn test_source_independence() {
    let mut source = vec![1, 2, 3];
    let array = AtomicI32Array::from_slice(&source);
    source[2] = 0;
    assert_eq!(array.get(2), Ok(3));

    let array: AtomicI32Array = vec![4, 5].into();
    assert_eq!(array.into_vec(), vec![4, 5]);
}

#[test]
fn test_debug() {
    let array: AtomicI32Array = (1..=3).collect();
    assert_eq!(format!("{:?}", array), "AtomicI32Array { values: [1, 2, 3] }");
}

#[test]
fn test_concurrent_increments_per_slot() {
    let array = Arc::new(AtomicI32Array::new(4));
    let mut handles = vec![];

    for i in 0..8 {
        let array = array.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                array.increment_and_get(i % 4).unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(array.to_vec(), vec![2000; 4]);
    let total: i32 = array.with_slots(|slots| slots.iter().sum());
    assert_eq!(total, 8000);
}
