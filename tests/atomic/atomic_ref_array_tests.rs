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
    AtomicRefArray,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

#[test]
fn test_new_default_initialized() {
    let array: AtomicRefArray<String> = AtomicRefArray::new(3);
    assert_eq!(array.len(), 3);
    assert!(!array.is_empty());
    assert_eq!(array.to_vec(), vec![String::new(); 3]);
}

#[test]
fn test_new_empty() {
    let array: AtomicRefArray<i32> = AtomicRefArray::new(0);
    assert!(array.is_empty());
    assert_eq!(
        array.get(0),
        Err(AtomicError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_get_set() {
    let array = AtomicRefArray::from_slice(&["a", "b", "c"]);
    assert_eq!(array.get(1), Ok("b"));
    array.set(1, "x").unwrap();
    assert_eq!(array.get(1), Ok("x"));
}

#[test]
fn test_swap() {
    let array = AtomicRefArray::from_slice(&[1, 2, 3]);
    assert_eq!(array.swap(0, 10), Ok(1));
    assert_eq!(array.get_and_set(0, 20), Ok(10));
    assert_eq!(array.get(0), Ok(20));
}

#[test]
fn test_compare_and_set() {
    let array = AtomicRefArray::from_slice(&[String::from("a"), String::from("b")]);

    // Structural equality: a separately built "a" matches.
    assert_eq!(
        array.compare_and_set(0, &String::from("a"), String::from("z")),
        Ok(true)
    );
    assert_eq!(array.get(0), Ok(String::from("z")));

    assert_eq!(
        array.compare_and_set(1, &String::from("a"), String::from("y")),
        Ok(false)
    );
    assert_eq!(array.get(1), Ok(String::from("b")));
}

#[test]
fn test_weak_compare_and_set() {
    let array = AtomicRefArray::from_slice(&[0, 0]);
    assert_eq!(array.weak_compare_and_set(1, &0, 5), Ok(true));
    assert_eq!(array.weak_compare_and_set(1, &0, 6), Ok(false));
    assert_eq!(array.to_vec(), vec![0, 5]);
}

#[test]
fn test_out_of_range_index() {
    let array = AtomicRefArray::from_slice(&[1, 2, 3]);
    let len = array.len();

    for index in [len, len + 1, usize::MAX] {
        let expected = Err(AtomicError::IndexOutOfRange { index, len });
        assert_eq!(array.get(index), expected);
        assert_eq!(array.set(index, 0), Err(AtomicError::IndexOutOfRange { index, len }));
        assert_eq!(array.swap(index, 0), expected);
        assert_eq!(
            array.compare_and_set(index, &1, 0),
            Err(AtomicError::IndexOutOfRange { index, len })
        );
        assert_eq!(array.get_and_update(index, |x| *x), expected);
        assert_eq!(array.update_and_get(index, |x| *x), expected);
    }

    assert_eq!(array.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_try_from_source() {
    let source = [1, 2, 3];
    let array = AtomicRefArray::try_from_source(Some(&source[..])).unwrap();
    assert_eq!(array.to_vec(), vec![1, 2, 3]);

    let missing: Option<&[i32]> = None;
    assert_eq!(
        AtomicRefArray::try_from_source(missing).err(),
        Some(AtomicError::InvalidArgument { name: "source" })
    );
}

#[test]
fn test_from_slice_is_independent_of_source() {
    let mut source = vec![1, 2, 3];
    let array = AtomicRefArray::from_slice(&source);

    source[0] = 100;
    assert_eq!(array.get(0), Ok(1));

    array.set(1, 200).unwrap();
    assert_eq!(source[1], 2);
}

#[test]
fn test_to_vec_is_snapshot() {
    let array = AtomicRefArray::from_slice(&[1, 2]);
    let mut snapshot = array.to_vec();
    snapshot[0] = 9;
    assert_eq!(array.get(0), Ok(1));

    array.set(1, 7).unwrap();
    assert_eq!(snapshot[1], 2);
}

#[test]
fn test_from_vec_and_iter() {
    let array = AtomicRefArray::from(vec!['a', 'b']);
    assert_eq!(array.len(), 2);

    let array: AtomicRefArray<u32> = (0..4).collect();
    assert_eq!(array.into_vec(), vec![0, 1, 2, 3]);
}

#[test]
fn test_get_and_update() {
    let array = AtomicRefArray::from_slice(&[String::from("a")]);
    let old = array.get_and_update(0, |s| format!("{}b", s));
    assert_eq!(old, Ok(String::from("a")));
    assert_eq!(
        array.update_and_get(0, |s| format!("{}c", s)),
        Ok(String::from("abc"))
    );
}

#[test]
fn test_clone_is_independent() {
    let array = AtomicRefArray::from_slice(&[1, 2]);
    let cloned = array.clone();
    array.set(0, 10).unwrap();
    assert_eq!(cloned.to_vec(), vec![1, 2]);
}

#[test]
fn test_with_slots_keeps_cross_index_invariant() {
    let array = Arc::new(AtomicRefArray::from_slice(&[1000, 0]));
    let mut handles = vec![];

    for _ in 0..4 {
        let array = array.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..250 {
                array.with_slots(|slots| {
                    slots[0] -= 1;
                    slots[1] += 1;
                });
                let snapshot = array.to_vec();
                assert_eq!(snapshot[0] + snapshot[1], 1000);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(array.to_vec(), vec![0, 1000]);
}

#[test]
fn test_two_threads_race_on_compare_and_set() {
    for _ in 0..100 {
        let array = Arc::new(AtomicRefArray::from_slice(&[0, 0, 0, 0, 0]));
        let barrier = Arc::new(Barrier::new(2));
        let mut handles = vec![];

        for _ in 0..2 {
            let array = array.clone();
            let barrier = barrier.clone();
            handles.push(thread::spawn(move || {
                barrier.wait();
                array.compare_and_set(2, &0, 1).unwrap()
            }));
        }

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(array.get(2), Ok(1));
    }
}

#[test]
fn test_debug() {
    let array = AtomicRefArray::from_slice(&["a"]);
    assert_eq!(format!("{:?}", array), "AtomicRefArray { values: [\"a\"] }");
}
