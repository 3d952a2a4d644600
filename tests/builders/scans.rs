//! Sortedness, bracket, and spiral scenarios

use algotrace_builders::{brackets, sortedness, spiral};
use algotrace_foundation::StepKind;

// =============================================================================
// Sortedness
// =============================================================================

#[test]
fn sorted_array_of_seven() {
    let trace = sortedness::build(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(trace.result(), Some(&true));
    assert_eq!(trace.terminal().state().validated, 7);
}

#[test]
fn first_inversion_terminates() {
    let trace = sortedness::build(&[5, 3, 8]).unwrap();
    let end = trace.terminal().state();
    assert_eq!((end.current, end.next), (0, 1));
    assert_eq!(trace.result(), Some(&false));
    assert_eq!(trace.len(), 3);
}

#[test]
fn late_inversion_compares_every_earlier_pair() {
    let trace = sortedness::build(&[1, 2, 3, 9, 4]).unwrap();
    assert_eq!(trace.kind_counts().get(&StepKind::Compare), Some(&4));
    assert_eq!(trace.terminal().state().current, 3);
}

// =============================================================================
// Brackets
// =============================================================================

#[test]
fn nested_brackets_are_valid() {
    let trace = brackets::build("({[]})").unwrap();
    assert_eq!(trace.result(), Some(&true));
    assert!(trace.terminal().state().stack.is_empty());
}

#[test]
fn crossed_brackets_fail_at_index_one() {
    let trace = brackets::build("(]").unwrap();
    assert_eq!(trace.result(), Some(&false));
    assert_eq!(trace.terminal().state().index, Some(1));
    assert_eq!(trace.len(), 3);
}

#[test]
fn stack_grows_and_shrinks_with_brackets() {
    let trace = brackets::build("(()[])").unwrap();
    let depths: Vec<_> = trace.iter().map(|s| s.state().stack.len()).collect();
    assert_eq!(depths, vec![0, 1, 2, 1, 2, 1, 0, 0]);
}

// =============================================================================
// Spiral
// =============================================================================

#[test]
fn five_by_five_spiral() {
    let grid: Vec<Vec<i64>> = (0..5).map(|r| (1..=5).map(|c| r * 5 + c).collect()).collect();
    let trace = spiral::build(&grid).unwrap();
    assert_eq!(
        trace.result().unwrap().to_vec(),
        vec![
            1, 2, 3, 4, 5, 10, 15, 20, 25, 24, 23, 22, 21, 16, 11, 6, 7, 8, 9, 14, 19, 18, 17,
            12, 13
        ]
    );
}

#[test]
fn single_row_spiral() {
    let trace = spiral::build(&[vec![4, 5, 6]]).unwrap();
    assert_eq!(trace.result().unwrap().to_vec(), vec![4, 5, 6]);
}

#[test]
fn builder_does_not_mutate_grid() {
    let grid = vec![vec![1, 2], vec![3, 4]];
    let _ = spiral::build(&grid).unwrap();
    assert_eq!(grid, vec![vec![1, 2], vec![3, 4]]);
}
