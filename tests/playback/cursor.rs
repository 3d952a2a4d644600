//! Cursor operations over built traces

use algotrace_builders::{brackets, spiral};
use algotrace_playback::{Cursor, next, previous, reset, seek};

#[test]
fn free_functions_saturate_at_both_ends() {
    let trace = brackets::build("(]").unwrap();
    let last = trace.last_index();

    assert_eq!(next(&trace, last), last);
    assert_eq!(previous(&trace, 0), 0);
    assert_eq!(seek(&trace, usize::MAX), last);
    assert_eq!(reset(), 0);
}

#[test]
fn walking_forward_visits_every_step_once() {
    let trace = spiral::build(&[vec![1, 2], vec![3, 4]]).unwrap();
    let mut index = reset();
    let mut seen = vec![index];
    while index < trace.last_index() {
        index = next(&trace, index);
        seen.push(index);
    }
    assert_eq!(seen, (0..trace.len()).collect::<Vec<_>>());
    assert!(trace.get(index).unwrap().is_terminal());
}

#[test]
fn cursor_reads_steps() {
    let trace = brackets::build("()").unwrap();
    let mut cursor = Cursor::for_trace(&trace);
    assert_eq!(cursor.current(&trace).unwrap().description(), trace.first().description());
    cursor.seek(99);
    assert!(cursor.current(&trace).unwrap().is_terminal());
    cursor.previous();
    assert!(!cursor.current(&trace).unwrap().is_terminal());
}
