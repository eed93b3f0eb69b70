use super::*;

#[test]
fn empty() {
    let heap: MergeableHeap<i32> = MergeableHeap::new();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    heap.check();
}

#[test]
fn one() {
    let mut heap = MergeableHeap::new();
    heap.check();
    heap.push(1);
    assert_eq!(heap.len(), 1);
    assert!(!heap.is_empty());
    heap.check();
}

#[test]
fn push_and_pop_counts() {
    let mut heap = MergeableHeap::new();
    for i in 0..50 {
        heap.push(i);
        heap.check();
    }
    for k in 1..=20 {
        heap.pop().unwrap();
        assert_eq!(heap.len(), 50 - k);
        heap.check();
    }
    assert_eq!(heap.len(), 30);
}

#[test]
fn clear() {
    let mut heap: MergeableHeap<i32> = (0..100).collect();
    assert_eq!(heap.len(), 100);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.top(), Err(QueueError::EmptyContainer));
    heap.check();
    heap.push(4);
    assert_eq!(heap.top(), Ok(&4));
}

#[test]
fn collect_and_extend() {
    let mut heap: MergeableHeap<i32> = vec![3, 9, 1].into_iter().collect();
    heap.check();
    heap.extend(vec![7, 12]);
    heap.check();
    assert_eq!(heap.len(), 5);
    heap.extend(Vec::new());
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.into_sorted_vec(), vec![12, 9, 7, 3, 1]);

    let heap = MergeableHeap::from(Vec::<i32>::new());
    assert!(heap.is_empty());
}

#[test]
fn right_spine_is_logarithmic() {
    let mut heap = MergeableHeap::new();
    for i in 0..4096 {
        heap.push(i);
    }
    let heap2: MergeableHeap<i32> = (0..4096).rev().collect();
    // floor(log2(4097)) = 12
    assert!(heap.right_spine() <= 12);
    assert!(heap2.right_spine() <= 12);
    heap.check();
    heap2.check();
}

#[test]
fn debug_output() {
    let mut heap = MergeableHeap::new();
    assert_eq!(format!("{heap:?}"), "MergeableHeap { len: 0, top: None }");
    heap.push(2);
    heap.push(6);
    assert_eq!(format!("{heap:?}"), "MergeableHeap { len: 2, top: Some(6) }");
}
