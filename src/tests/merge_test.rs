use super::*;

#[test]
fn merge_scenario() {
    let mut a = MergeableHeap::new();
    a.push(5);
    a.push(1);
    let mut b = MergeableHeap::new();
    b.push(8);
    b.push(3);
    a.merge(&mut b);
    assert_eq!(a.len(), 4);
    assert_eq!(b.len(), 0);
    assert!(b.is_empty());
    a.check();
    b.check();
    assert_eq!(a.into_sorted_vec(), vec![8, 5, 3, 1]);
}

#[test]
fn merge_with_empty() {
    let mut a: MergeableHeap<i32> = (0..5).collect();
    let mut empty = MergeableHeap::new();
    a.merge(&mut empty);
    assert_eq!(a.len(), 5);
    a.check();

    empty.merge(&mut a);
    assert_eq!(empty.len(), 5);
    assert!(a.is_empty());
    assert_eq!(empty.top(), Ok(&4));
    empty.check();
}

#[test]
fn argument_stays_usable() {
    let mut a: MergeableHeap<i32> = vec![1, 2].into();
    let mut b: MergeableHeap<i32> = vec![3].into();
    a.merge(&mut b);
    assert_eq!(b.pop(), Err(QueueError::EmptyContainer));
    b.push(10);
    assert_eq!(b.top(), Ok(&10));
    assert_eq!(a.top(), Ok(&3));
    a.merge(&mut b);
    assert_eq!(a.len(), 4);
    assert_eq!(a.top(), Ok(&10));
}

#[test]
fn many_merges() {
    let mut total: MergeableHeap<i32, Greater> = MergeableHeap::default();
    for chunk in 0..20 {
        let mut part: MergeableHeap<i32, Greater> = (chunk * 10..chunk * 10 + 10).rev().collect();
        assert_eq!(part.len(), 10);
        total.merge(&mut part);
        assert!(part.is_empty());
        total.check();
        assert!(total.right_spine() <= 8);
    }
    assert_eq!(total.len(), 200);
    assert_eq!(total.into_sorted_vec(), (0..200).collect::<Vec<_>>());
}
