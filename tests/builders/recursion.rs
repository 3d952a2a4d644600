//! Palindrome and reversal scenarios

use algotrace_builders::{palindrome, reverse};
use algotrace_foundation::StepKind;

#[test]
fn racecar_depth_is_four() {
    let trace = palindrome::build("racecar").unwrap();
    let depth = trace.iter().map(|s| s.state().stack.depth()).max();
    assert_eq!(trace.result(), Some(&true));
    assert_eq!(depth, Some(4));
    assert_eq!(trace.terminal().state().stack.depth(), 0);
}

#[test]
fn frames_record_their_arguments() {
    let trace = palindrome::build("abcba").unwrap();
    let deepest = trace
        .iter()
        .max_by_key(|s| s.state().stack.depth())
        .unwrap();
    let args: Vec<_> = deepest
        .state()
        .stack
        .frames()
        .map(|f| (f.arg("left"), f.arg("right")))
        .collect();
    assert_eq!(
        args,
        vec![(Some(0), Some(4)), (Some(1), Some(3)), (Some(2), Some(2))]
    );
}

#[test]
fn mismatch_decides_false_before_unwinding() {
    let trace = palindrome::build("abcdba").unwrap();
    let first_decided = trace.iter().position(|s| s.result().is_some()).unwrap();
    assert_eq!(trace.get(first_decided).unwrap().kind(), StepKind::Return);
    assert_eq!(trace.result(), Some(&false));
}

#[test]
fn reverse_records_each_swap() {
    let trace = reverse::build(&[1, 2, 3, 4, 5, 6]).unwrap();
    let arrays: Vec<_> = trace
        .positions_of(StepKind::Swap)
        .into_iter()
        .map(|i| trace.get(i).unwrap().state().array.to_vec())
        .collect();
    assert_eq!(
        arrays,
        vec![
            vec![6, 2, 3, 4, 5, 1],
            vec![6, 5, 3, 4, 2, 1],
            vec![6, 5, 4, 3, 2, 1],
        ]
    );
    assert_eq!(trace.result().unwrap().to_vec(), vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn long_inputs_do_not_grow_the_host_stack() {
    let text = "a".repeat(50_000);
    let trace = palindrome::build(&text).unwrap();
    assert_eq!(trace.result(), Some(&true));

    let values: Vec<i64> = (0..50_000).collect();
    let trace = reverse::build(&values).unwrap();
    assert_eq!(trace.result().unwrap().first(), Some(&49_999));
}
