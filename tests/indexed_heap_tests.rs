//! Comprehensive tests for IndexedHeap implementations
//!
//! These tests run against both the real binary heap and the linear-scan
//! reference heap, so every scenario checks the trait contract rather than one
//! implementation's quirks.

mod common;

use common::ScanHeap;
use indexed_astar::indexed_binary::IndexedBinaryHeap;
use indexed_astar::{HeapError, IndexedHeap};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: IndexedHeap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek_min(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.pop_min(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.delete_min(), Err(HeapError::EmptyHeap));
}

/// Test basic insert and pop operations
fn test_basic_operations<H: IndexedHeap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.insert("five", 5).unwrap();
    heap.insert("one", 1).unwrap();
    heap.insert("ten", 10).unwrap();
    heap.insert("three", 3).unwrap();

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek_min(), Ok(&"one"));

    assert_eq!(heap.pop_min(), Ok("one"));
    assert_eq!(heap.pop_min(), Ok("three"));
    assert_eq!(heap.pop_min(), Ok("five"));
    assert_eq!(heap.pop_min(), Ok("ten"));
    assert_eq!(heap.pop_min(), Err(HeapError::EmptyHeap));
}

/// insert(x,5); insert(y,2); insert(z,8); decrease_key(x,1) -> x, then y
fn test_decrease_key_sequence<H: IndexedHeap<char, i32>>() {
    let mut heap = H::new();
    heap.insert('x', 5).unwrap();
    heap.insert('y', 2).unwrap();
    heap.insert('z', 8).unwrap();
    heap.decrease_key('x', 1).unwrap();

    assert_eq!(heap.peek_min(), Ok(&'x'));
    assert_eq!(heap.pop_min(), Ok('x'));
    assert_eq!(heap.pop_min(), Ok('y'));
    assert_eq!(heap.pop_min(), Ok('z'));
}

/// Decreasing a key that does not become the minimum leaves the root alone
fn test_decrease_not_to_min<H: IndexedHeap<char, i32>>() {
    let mut heap = H::new();
    heap.insert('a', 1).unwrap();
    heap.insert('b', 50).unwrap();
    heap.insert('c', 60).unwrap();
    heap.decrease_key('c', 10).unwrap();

    assert_eq!(heap.peek_min(), Ok(&'a'));
    assert_eq!(heap.pop_min(), Ok('a'));
    assert_eq!(heap.pop_min(), Ok('c'));
    assert_eq!(heap.pop_min(), Ok('b'));
}

/// Contract violations are reported, and leave the heap untouched
fn test_contract_errors<H: IndexedHeap<u32, u32>>() {
    let mut heap = H::new();
    heap.insert(1, 10).unwrap();
    heap.insert(2, 20).unwrap();

    assert_eq!(heap.insert(1, 0), Err(HeapError::DuplicateElement));
    assert_eq!(heap.decrease_key(2, 20), Err(HeapError::PriorityNotDecreased));
    assert_eq!(heap.decrease_key(2, 25), Err(HeapError::PriorityNotDecreased));

    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop_min(), Ok(1));
    assert_eq!(heap.pop_min(), Ok(2));
}

/// decrease_key on an absent element behaves like insert
fn test_decrease_key_inserts<H: IndexedHeap<u32, u32>>() {
    let mut heap = H::new();
    heap.decrease_key(7, 3).unwrap();
    assert!(heap.contains(&7));
    assert_eq!(heap.len(), 1);
    heap.decrease_key(7, 1).unwrap();
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.pop_min(), Ok(7));
    assert!(!heap.contains(&7));
}

/// Test many decrease_key operations
fn test_many_decrease_keys<H: IndexedHeap<i32, i32>>() {
    let mut heap = H::new();

    for i in 0..500 {
        heap.push(10000 + i, i).unwrap();
    }

    // Reverse the order entirely
    for i in 0..500 {
        assert!(heap.decrease_key(i, 499 - i).is_ok());
    }

    for i in (0..500).rev() {
        assert_eq!(heap.pop_min(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: IndexedHeap<i32, i32>>() {
    let mut heap = H::new();

    // Two in, one out: the i-th pop always sees 0..i already gone
    for i in 0..200 {
        heap.insert(2 * i, 2 * i).unwrap();
        heap.insert(2 * i + 1, 2 * i + 1).unwrap();
        assert_eq!(heap.pop_min(), Ok(i));
    }

    assert_eq!(heap.len(), 200);
    for i in 200..400 {
        assert_eq!(heap.pop_min(), Ok(i));
    }
    assert!(heap.is_empty());
}

macro_rules! heap_suite {
    ($name:ident, $heap:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap::<$heap<_, _>>();
            }

            #[test]
            fn basic_operations() {
                test_basic_operations::<$heap<_, _>>();
            }

            #[test]
            fn decrease_key_sequence() {
                test_decrease_key_sequence::<$heap<_, _>>();
            }

            #[test]
            fn decrease_not_to_min() {
                test_decrease_not_to_min::<$heap<_, _>>();
            }

            #[test]
            fn contract_errors() {
                test_contract_errors::<$heap<_, _>>();
            }

            #[test]
            fn decrease_key_inserts() {
                test_decrease_key_inserts::<$heap<_, _>>();
            }

            #[test]
            fn many_decrease_keys() {
                test_many_decrease_keys::<$heap<_, _>>();
            }

            #[test]
            fn alternating_ops() {
                test_alternating_ops::<$heap<_, _>>();
            }
        }
    };
}

heap_suite!(indexed_binary, IndexedBinaryHeap);
heap_suite!(scan_reference, ScanHeap);

#[test]
fn test_key_of_tracks_decreases() {
    let mut heap = IndexedBinaryHeap::new();
    heap.insert("a", 9).unwrap();
    assert_eq!(heap.key_of(&"a"), Some(&9));
    heap.decrease_key("a", 4).unwrap();
    assert_eq!(heap.key_of(&"a"), Some(&4));
    assert_eq!(heap.key_of(&"b"), None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        HeapError::DuplicateElement.to_string(),
        "element is already present in the heap"
    );
    assert_eq!(HeapError::EmptyHeap.to_string(), "no elements in heap");
    assert_eq!(
        HeapError::PriorityNotDecreased.to_string(),
        "new priority is not less than current priority"
    );
}

#[test]
fn test_tuple_states() {
    let mut heap: IndexedBinaryHeap<(u8, u8, u8), u64> = IndexedBinaryHeap::default();
    heap.insert((3, 0, 1), 4).unwrap();
    heap.insert((0, 0, 0), 0).unwrap();
    heap.insert((1, 2, 3), 2).unwrap();
    assert_eq!(heap.pop(), Some((0, (0, 0, 0))));
    assert_eq!(heap.pop(), Some((2, (1, 2, 3))));
    assert_eq!(heap.pop(), Some((4, (3, 0, 1))));
}
