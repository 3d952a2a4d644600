//! Integration tests for persistent snapshots
//!
//! Snapshots share structure; recording one never changes another.

use algotrace_foundation::{CallStack, Frame, TraceVec};

// =============================================================================
// TraceVec
// =============================================================================

#[test]
fn push_leaves_original_untouched() {
    let a: TraceVec<i64> = vec![1, 2, 3].into();
    let b = a.push_back(4);
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 4);
    assert_eq!(b.last(), Some(&4));
}

#[test]
fn swap_returns_new_vector() {
    let a: TraceVec<i64> = vec![1, 2, 3].into();
    let b = a.swap(0, 2).unwrap();
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
    assert_eq!(b.to_vec(), vec![3, 2, 1]);
    assert!(a.swap(0, 3).is_none());
}

#[test]
fn pop_back_on_empty() {
    let empty: TraceVec<char> = TraceVec::new();
    assert!(empty.pop_back().is_none());
    let (rest, top) = empty.push_back('(').pop_back().unwrap();
    assert!(rest.is_empty());
    assert_eq!(top, '(');
}

#[test]
fn collects_and_iterates() {
    let v: TraceVec<i64> = (1..=4).collect();
    let doubled: Vec<i64> = v.iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);
    assert_eq!(format!("{v:?}"), "[1, 2, 3, 4]");
}

// =============================================================================
// CallStack
// =============================================================================

#[test]
fn call_stack_depth_follows_push_and_pop() {
    let frame = |l: usize, r: usize| Frame::new("f").with_index("l", l).with_index("r", r);
    let s0 = CallStack::new();
    let s1 = s0.push(frame(0, 4));
    let s2 = s1.push(frame(1, 3));

    assert_eq!((s0.depth(), s1.depth(), s2.depth()), (0, 1, 2));
    assert_eq!(s2.frames().last().and_then(|f| f.arg("l")), Some(1));
    assert_eq!(s2.without_top(), s1);
    assert_eq!(s2.to_string(), "f(l=0, r=4) > f(l=1, r=3)");
}

#[test]
fn frame_index_saturates() {
    let frame = Frame::new("f").with_index("huge", usize::MAX);
    assert_eq!(frame.arg("huge"), Some(i64::MAX));
}
