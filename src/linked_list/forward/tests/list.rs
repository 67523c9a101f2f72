extern crate std;

use std::panic::{self, AssertUnwindSafe};
use std::vec;
use std::vec::Vec;

use alloc::collections::TryReserveError;
use alloc::string::{String, ToString};

use crate::linked_list::forward::{swap, ForwardList, ListError};

fn values<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_new_list_is_empty() {
    let list = ForwardList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.begin(), list.end());
}

#[test]
fn test_push_front_pop_front() {
    let mut list = ForwardList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());

    list.push_front(0);
    assert_eq!(list.pop_front(), 0);
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);

    assert_eq!(list.pop_front(), 1);
    assert_eq!(list.pop_front(), 2);
    assert_eq!(list.pop_front(), 3);
    assert!(list.is_empty());
}

#[test]
#[should_panic(expected = "pop_front: the list is empty")]
fn test_pop_front_on_empty_panics() {
    let mut list = ForwardList::<i32>::new();
    list.pop_front();
}

#[test]
fn test_from_sequence_keeps_order() {
    let list = ForwardList::from([1, 2, 3, 4]);
    assert_eq!(values(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.front(), Some(&1));

    let collected: ForwardList<_> = (0..5).collect();
    assert_eq!(values(&collected), vec![0, 1, 2, 3, 4]);

    let empty: ForwardList<i32> = core::iter::empty().collect();
    assert!(empty.is_empty());
}

#[test]
fn test_insert_then_erase_scenario() {
    let mut list = ForwardList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    let at_one = list.begin();
    assert_eq!(list[at_one], 1);

    let inserted = list.insert_after(at_one, 99);
    assert_eq!(list[inserted], 99);
    assert_eq!(values(&list), vec![1, 99, 2, 3]);
    assert_eq!(list.len(), 4);

    let next = list.erase_after(at_one);
    assert_eq!(list[next], 2);
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_and_erase_at_front() {
    let mut list = ForwardList::from([2, 3]);
    let before = list.before_begin();

    let first = list.insert_after(before, 1);
    assert_eq!(list.begin(), first);
    assert_eq!(values(&list), vec![1, 2, 3]);

    let next = list.erase_after(before);
    assert_eq!(list[next], 2);
    assert_eq!(values(&list), vec![2, 3]);
}

#[test]
fn test_insert_and_erase_at_tail() {
    let mut list = ForwardList::from([1, 2]);
    let last = list.begin().successor(&list);

    let tail = list.insert_after(last, 3);
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert!(tail.successor(&list).is_end());

    let next = list.erase_after(last);
    assert!(next.is_end());
    assert_eq!(next, list.end());
    assert_eq!(values(&list), vec![1, 2]);
}

#[test]
fn test_insert_into_empty_list() {
    let mut list = ForwardList::new();
    let before = list.before_begin();
    let pos = list.insert_after(before, "only");
    assert_eq!(list.begin(), pos);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_after_returns_value() {
    let mut list = ForwardList::from(["a".to_string(), "b".to_string(), "c".to_string()]);
    let first = list.begin();
    assert_eq!(list.remove_after(first), "b");
    assert_eq!(list.remove_after(list.before_begin()), "a");
    assert_eq!(values(&list), vec!["c".to_string()]);
}

#[test]
fn test_clear() {
    let mut list = ForwardList::from([1, 2, 3]);
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.begin(), list.end());

    list.push_front(7);
    assert_eq!(values(&list), vec![7]);
}

#[test]
fn test_swap_exchanges_contents() {
    let mut a = ForwardList::from([1, 2, 3]);
    let mut b = ForwardList::from([9]);

    a.swap(&mut b);
    assert_eq!(values(&a), vec![9]);
    assert_eq!(values(&b), vec![1, 2, 3]);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 3);

    swap(&mut a, &mut b);
    assert_eq!(values(&a), vec![1, 2, 3]);
    assert_eq!(values(&b), vec![9]);

    core::mem::swap(&mut a, &mut b);
    assert_eq!(values(&a), vec![9]);
}

#[test]
fn test_clone_is_deep() {
    let original = ForwardList::from([String::from("x"), String::from("y")]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.front_mut().unwrap().push('!');
    copy.push_front(String::from("w"));

    assert_eq!(values(&original), vec!["x", "y"]);
    assert_eq!(values(&copy), vec!["w", "x!", "y"]);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = ForwardList::from([1, 2, 3]);
    let mut target = ForwardList::from([7, 8]);
    target.clone_from(&source);
    assert_eq!(target, source);

    target.assign([5, 6]);
    assert_eq!(values(&target), vec![5, 6]);
    assert_eq!(values(&source), vec![1, 2, 3]);
}

#[derive(Debug, PartialEq)]
struct Fragile(i32);

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.0 < 0 {
            panic!("refusing to clone {}", self.0);
        }
        Fragile(self.0)
    }
}

#[test]
fn test_failed_clone_from_leaves_target_unchanged() {
    let source = ForwardList::from([Fragile(1), Fragile(-1), Fragile(3)]);
    let mut target = ForwardList::from([Fragile(10), Fragile(20)]);
    let first = target.begin();

    let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());

    assert_eq!(target.len(), 2);
    assert_eq!(target.iter().map(|f| f.0).collect::<Vec<_>>(), vec![10, 20]);
    assert!(target.is_valid(first));
    assert_eq!(target[first], Fragile(10));
}

#[test]
fn test_failed_assign_leaves_target_unchanged() {
    let mut target = ForwardList::from([1, 2]);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        target.assign((0..5).map(|i| if i == 3 { panic!("source failed") } else { i }));
    }));
    assert!(result.is_err());
    assert_eq!(values(&target), vec![1, 2]);
}

#[test]
fn test_try_operations_succeed() {
    let mut list = ForwardList::try_from_iter([2, 3]).unwrap();
    let first = list.try_push_front(1).unwrap();
    assert_eq!(first, list.begin());
    assert_eq!(list[first], 1);
    let pos = list.try_insert_after(list.begin(), 10).unwrap();
    assert_eq!(list[pos], 10);
    assert_eq!(values(&list), vec![1, 10, 2, 3]);

    list.try_assign([4, 5]).unwrap();
    assert_eq!(values(&list), vec![4, 5]);
}

#[test]
fn test_list_error_display() {
    let err: TryReserveError = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
    let err = ListError::from(err);
    assert!(err.to_string().contains("failed to allocate a list node"));
    assert!(matches!(err, ListError::Alloc(_)));
    let _: &dyn core::error::Error = &err;
}

#[test]
fn test_iter_mut_and_index_mut() {
    let mut list = ForwardList::from([1, 2, 3]);
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(values(&list), vec![10, 20, 30]);

    let second = list.begin_mut().successor(&list);
    list[second] += 1;
    *list.get_mut(second).unwrap() += 1;
    assert_eq!(values(&list), vec![10, 22, 30]);

    for value in &mut list {
        *value -= 10;
    }
    assert_eq!(values(&list), vec![0, 12, 20]);
}

#[test]
fn test_iterators_report_exact_size() {
    let mut list = ForwardList::from([1, 2, 3]);
    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.clone().count(), 2);

    assert_eq!(list.iter_mut().len(), 3);

    let mut owned = list.into_iter();
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.next(), Some(1));
    assert_eq!(owned.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_extend_appends_at_back() {
    let mut list = ForwardList::from([1, 2]);
    list.extend([3, 4]);
    list.extend(&[5]);
    assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);

    let mut empty = ForwardList::<i32>::new();
    empty.extend(vec![1]);
    assert_eq!(values(&empty), vec![1]);
}

#[test]
fn test_reuses_freed_nodes() {
    let mut list = ForwardList::with_capacity(4);
    list.extend([1, 2, 3, 4]);
    let capacity = list.capacity();

    list.pop_front();
    list.erase_after(list.begin());
    list.push_front(5);
    list.push_front(6);
    assert_eq!(list.capacity(), capacity);
    assert_eq!(values(&list), vec![6, 5, 2, 4]);
}

#[test]
fn test_shrink_to_fit_keeps_elements() {
    let mut list: ForwardList<i32> = (0..64).collect();
    for _ in 0..60 {
        list.pop_front();
    }
    list.shrink_to_fit();
    assert_eq!(values(&list), vec![60, 61, 62, 63]);
    list.push_front(1);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_debug_format() {
    let list = ForwardList::from([1, 2]);
    assert_eq!(std::format!("{:?}", list), "[1, 2]");
}
