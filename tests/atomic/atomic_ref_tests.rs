/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::AtomicRef;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct TestData {
    value: i32,
    name: String,
}

fn data(value: i32, name: &str) -> Arc<TestData> {
    Arc::new(TestData {
        value,
        name: name.to_string(),
    })
}

#[test]
fn test_new() {
    let atomic = AtomicRef::new(data(42, "test"));
    let current = atomic.get().unwrap();
    assert_eq!(current.value, 42);
    assert_eq!(current.name, "test");
}

#[test]
fn test_empty_reads_none() {
    let atomic: AtomicRef<TestData> = AtomicRef::empty();
    assert!(atomic.get().is_none());
    assert!(atomic.is_empty());

    let atomic: AtomicRef<TestData> = AtomicRef::default();
    assert!(atomic.get().is_none());
}

#[test]
fn test_get_set() {
    let atomic = AtomicRef::new(data(42, "first"));
    atomic.set(Some(data(100, "second")));

    let current = atomic.get().unwrap();
    assert_eq!(current.value, 100);
    assert_eq!(current.name, "second");

    atomic.set(None);
    assert!(atomic.is_empty());
}

#[test]
fn test_swap() {
    let atomic = AtomicRef::new(data(42, "first"));
    let old = atomic.swap(Some(data(100, "second"))).unwrap();

    assert_eq!(old.value, 42);
    assert_eq!(old.name, "first");
    assert_eq!(atomic.get().unwrap().value, 100);
}

#[test]
fn test_get_and_set_from_empty() {
    let atomic = AtomicRef::empty();
    assert!(atomic.get_and_set(Some(data(1, "one"))).is_none());
    assert_eq!(atomic.get().unwrap().value, 1);
}

#[test]
fn test_compare_and_set_success() {
    let data1 = data(42, "first");
    let atomic = AtomicRef::new(data1.clone());

    assert!(atomic.compare_and_set(Some(&data1), Some(data(100, "second"))));
    assert_eq!(atomic.get().unwrap().value, 100);
}

#[test]
fn test_compare_and_set_uses_identity() {
    let data1 = data(42, "first");
    let atomic = AtomicRef::new(data1.clone());

    // Structurally equal, but a different allocation.
    let lookalike = data(42, "first");
    assert_eq!(*lookalike, *data1);
    assert!(!atomic.compare_and_set(Some(&lookalike), Some(data(100, "second"))));

    let current = atomic.get().unwrap();
    assert!(Arc::ptr_eq(&current, &data1));
}

#[test]
fn test_compare_and_set_with_empty() {
    let atomic = AtomicRef::empty();
    let value = data(1, "one");

    assert!(atomic.compare_and_set(None, Some(value.clone())));
    assert!(!atomic.compare_and_set(None, Some(data(2, "two"))));
    assert!(atomic.compare_and_set(Some(&value), None));
    assert!(atomic.is_empty());
}

#[test]
fn test_weak_compare_and_set() {
    let data1 = data(1, "one");
    let atomic = AtomicRef::new(data1.clone());
    assert!(atomic.weak_compare_and_set(Some(&data1), Some(data(2, "two"))));
    assert!(!atomic.weak_compare_and_set(Some(&data1), Some(data(3, "three"))));
    assert_eq!(atomic.get().unwrap().value, 2);
}

#[test]
fn test_compare_and_exchange() {
    let data1 = data(1, "one");
    let atomic = AtomicRef::new(data1.clone());

    let prev = atomic.compare_and_exchange(Some(&data1), Some(data(2, "two")));
    assert!(Arc::ptr_eq(prev.as_ref().unwrap(), &data1));

    let prev = atomic.compare_and_exchange(Some(&data1), Some(data(3, "three")));
    assert_eq!(prev.unwrap().value, 2);
    assert_eq!(atomic.get().unwrap().value, 2);
}

#[test]
fn test_points_to() {
    let data1 = data(1, "one");
    let atomic = AtomicRef::new(data1.clone());
    assert!(atomic.points_to(Some(&data1)));
    assert!(!atomic.points_to(Some(&data(1, "one"))));
    assert!(!atomic.points_to(None));
}

#[test]
fn test_get_and_update() {
    let atomic = AtomicRef::new(data(10, "ten"));
    let old = atomic.get_and_update(|current| {
        current.map(|d| data(d.value * 2, &d.name))
    });
    assert_eq!(old.unwrap().value, 10);
    assert_eq!(atomic.get().unwrap().value, 20);
}

#[test]
fn test_update_and_get() {
    let atomic = AtomicRef::new(data(10, "ten"));
    let new = atomic.update_and_get(|_| None);
    assert!(new.is_none());
    assert!(atomic.is_empty());
}

#[test]
fn test_clone_is_independent() {
    let atomic = AtomicRef::new(data(1, "one"));
    let cloned = atomic.clone();
    atomic.set(Some(data(2, "two")));
    assert_eq!(cloned.get().unwrap().value, 1);
}

#[test]
fn test_releases_reference_on_drop() {
    let value = data(1, "one");
    let atomic = AtomicRef::new(value.clone());
    assert_eq!(Arc::strong_count(&value), 2);
    drop(atomic);
    assert_eq!(Arc::strong_count(&value), 1);
}

#[test]
fn test_releases_replaced_reference() {
    let value = data(1, "one");
    let atomic = AtomicRef::new(value.clone());
    atomic.set(Some(data(2, "two")));
    assert_eq!(Arc::strong_count(&value), 1);
}

#[test]
fn test_into_inner() {
    let atomic = AtomicRef::new(Arc::new(5));
    assert_eq!(atomic.into_inner().as_deref(), Some(&5));
}

#[test]
fn test_display() {
    let atomic = AtomicRef::new(Arc::new(42));
    assert_eq!(format!("{}", atomic), "42");
    let empty: AtomicRef<i32> = AtomicRef::empty();
    assert_eq!(format!("{}", empty), "null");
}

#[test]
fn test_concurrent_updates() {
    let atomic = Arc::new(AtomicRef::new(Arc::new(0)));
    let mut handles = vec![];

    for _ in 0..10 {
        let atomic = atomic.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                atomic.update_and_get(|current| current.map(|x| Arc::new(*x + 1)));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.get().as_deref(), Some(&1000));
}
