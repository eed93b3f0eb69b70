use super::counter::Ledger;
use super::*;

#[test]
fn drop_releases_everything() {
    let ledger = Ledger::default();
    let mut heap = MergeableHeap::new();
    for key in 0..64 {
        heap.push(ledger.track(key));
    }
    assert_eq!(ledger.live(), 64);
    drop(heap);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn drop_empty_and_drained() {
    let ledger = Ledger::default();
    let empty = MergeableHeap::<super::counter::Tracked>::new();
    drop(empty);
    assert_eq!(ledger.live(), 0);

    let mut heap = MergeableHeap::new();
    for key in [5, 3, 8, 1] {
        heap.push(ledger.track(key));
    }
    while let Ok(value) = heap.pop() {
        drop(value);
    }
    assert_eq!(ledger.live(), 0);
    drop(heap);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn pop_hands_over_the_value() {
    let ledger = Ledger::default();
    let mut heap = MergeableHeap::new();
    heap.push(ledger.track(1));
    heap.push(ledger.track(2));
    let top = heap.pop().unwrap();
    assert_eq!(top.key, 2);
    assert_eq!(ledger.live(), 2);
    drop(top);
    assert_eq!(ledger.live(), 1);
}

#[test]
fn clone_counts() {
    let ledger = Ledger::default();
    let heap: MergeableHeap<_> = (0..10).map(|key| ledger.track(key)).collect();
    let mut copy = heap.clone();
    assert_eq!(ledger.live(), 20);
    copy.clone_from(&heap);
    assert_eq!(ledger.live(), 20);
    copy.clear();
    assert_eq!(ledger.live(), 10);
    drop(heap);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn merge_moves_without_copying() {
    let ledger = Ledger::default();
    let mut a: MergeableHeap<_> = (0..5).map(|key| ledger.track(key)).collect();
    let mut b: MergeableHeap<_> = (5..10).map(|key| ledger.track(key)).collect();
    a.merge(&mut b);
    assert_eq!(ledger.live(), 10);
    drop(b);
    assert_eq!(ledger.live(), 10);
    let keys: Vec<i32> = a.into_iter().map(|t| t.key).collect();
    assert_eq!(keys, (0..10).rev().collect::<Vec<_>>());
    assert_eq!(ledger.live(), 0);
}

#[test]
fn partial_iteration_frees_rest() {
    let ledger = Ledger::default();
    let heap: MergeableHeap<_> = (0..10).map(|key| ledger.track(key)).collect();
    let first: Vec<i32> = heap.into_iter().take(3).map(|t| t.key).collect();
    assert_eq!(first, vec![9, 8, 7]);
    assert_eq!(ledger.live(), 0);
}
