//! Parsing text into builder input

use algotrace_builders::Algorithm;
use algotrace_foundation::ErrorKind;
use algotrace_runtime::{AnyTrace, HumanFormatter, Input, InputLimits, Sampler, parse};

fn run(algorithm: Algorithm, text: &str) -> AnyTrace {
    let input = parse(algorithm, text, &InputLimits::for_algorithm(algorithm)).unwrap();
    AnyTrace::build(algorithm, &input).unwrap()
}

#[test]
fn text_to_trace_for_every_algorithm() {
    assert_eq!(run(Algorithm::Sortedness, "1,2,3").summary(), "sorted");
    assert_eq!(run(Algorithm::Palindrome, "level").summary(), "a palindrome");
    assert_eq!(run(Algorithm::Reverse, "1 2 3").summary(), "reversed: [3, 2, 1]");
    assert_eq!(
        run(Algorithm::Spiral, "1 2\n3 4").summary(),
        "spiral order: [1, 2, 4, 3]"
    );
    assert_eq!(run(Algorithm::Brackets, "(()").summary(), "not balanced");
}

#[test]
fn too_short_input_is_a_validation_error() {
    let limits = InputLimits::for_algorithm(Algorithm::Sortedness);
    let err = parse(Algorithm::Sortedness, "42", &limits).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidInput(_)));
    assert!(!err.is_precondition());
}

#[test]
fn ragged_grid_is_a_validation_error() {
    let limits = InputLimits::for_algorithm(Algorithm::Spiral);
    let err = parse(Algorithm::Spiral, "1 2 3; 4 5", &limits).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidInput(_)));
}

#[test]
fn samples_always_pass_validation_and_build() {
    for seed in 0..20 {
        let mut sampler = Sampler::new(seed);
        for algorithm in Algorithm::ALL {
            let limits = InputLimits::for_algorithm(algorithm);
            let input = sampler.sample(algorithm, 5);
            assert!(limits.check(&input).is_ok(), "{algorithm} seed {seed}");
            let trace = AnyTrace::build(algorithm, &input).unwrap();
            assert!(trace.validate().is_ok());
        }
    }
}

#[test]
fn oversized_samples_are_capped_to_limits() {
    let mut sampler = Sampler::new(11);
    for algorithm in Algorithm::ALL {
        let limits = InputLimits::for_algorithm(algorithm);
        let input = sampler.sample_within(algorithm, 100_000, &limits).unwrap();
        assert!(limits.check(&input).is_ok());
        assert!(AnyTrace::build(algorithm, &input).is_ok());
    }
}

#[test]
fn grid_without_columns_is_a_validation_error() {
    let limits = InputLimits::for_algorithm(Algorithm::Spiral);
    for text in [",", " , ; , "] {
        let err = parse(Algorithm::Spiral, text, &limits).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidInput(_)), "{text:?}");
        assert!(!err.is_precondition());
        assert_eq!(err.context.unwrap().algorithm.as_deref(), Some("spiral"));
    }
}

#[test]
fn text_input_is_not_filtered() {
    let input = parse(Algorithm::Palindrome, "Aa", &InputLimits::default()).unwrap();
    assert_eq!(input, Input::Text("Aa".into()));
    let trace = AnyTrace::build(Algorithm::Palindrome, &input).unwrap();
    assert_eq!(trace.summary(), "not a palindrome");
}

#[test]
fn formatted_trace_has_a_block_per_step() {
    let trace = run(Algorithm::Brackets, "([])");
    let text = trace.format_all(&HumanFormatter::new().without_state());
    assert_eq!(text.lines().count(), trace.len());
    assert!(text.lines().last().unwrap().ends_with("=> true"));
}
