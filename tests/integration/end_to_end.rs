//! Text in, steps out: validation, building, and playback together

use algotrace::builders::Algorithm;
use algotrace::playback::{PlaybackConfig, Player, TickOutcome, next, previous};
use algotrace::runtime::{AnyTrace, HumanFormatter, InputLimits, parse};

fn build(algorithm: Algorithm, text: &str) -> AnyTrace {
    let input = parse(algorithm, text, &InputLimits::for_algorithm(algorithm)).unwrap();
    AnyTrace::build(algorithm, &input).unwrap()
}

#[test]
fn play_brackets_and_read_each_step() {
    let trace = build(Algorithm::Brackets, "({[]})");
    let formatter = HumanFormatter::new().without_state().without_index();
    let mut player = Player::new(trace.len(), PlaybackConfig::fast());

    let mut lines = vec![trace.format_step(&formatter, player.index())];
    while let TickOutcome::Advanced(i) | TickOutcome::Finished(i) = player.tick() {
        lines.push(trace.format_step(&formatter, i));
    }

    assert_eq!(lines.len(), trace.len());
    assert!(lines[0].starts_with("init"));
    assert!(lines.last().unwrap().ends_with("=> true"));
}

#[test]
fn seeking_past_either_end_stays_on_the_trace() {
    let algotrace::runtime::AnyTrace::Sortedness(trace) = build(Algorithm::Sortedness, "5 3 8")
    else {
        panic!("expected a sortedness trace");
    };
    assert_eq!(trace.len(), 3);
    assert_eq!(next(&trace, 2), 2);
    assert_eq!(previous(&trace, 0), 0);
}

#[test]
fn rebuilding_replaces_the_trace_wholesale() {
    let first = build(Algorithm::Palindrome, "racecar");
    let second = build(Algorithm::Palindrome, "racecars");
    assert_ne!(first, second);
    assert_eq!(first, build(Algorithm::Palindrome, "racecar"));
}

#[test]
fn invalid_text_never_produces_a_trace() {
    for (algorithm, text) in [
        (Algorithm::Sortedness, "1"),
        (Algorithm::Reverse, "one two"),
        (Algorithm::Spiral, "1 2; 3"),
        (Algorithm::Brackets, "  "),
    ] {
        let limits = InputLimits::for_algorithm(algorithm);
        assert!(parse(algorithm, text, &limits).is_err(), "{algorithm}: {text:?}");
    }
}
