//! Property tests across layers

use proptest::prelude::*;

use algotrace::builders::{Algorithm, sortedness};
use algotrace::playback::{next, previous, seek};
use algotrace::runtime::{AnyTrace, Sampler};

proptest! {
    #[test]
    fn sampled_traces_are_deterministic(seed in any::<u64>(), size in 1usize..12) {
        for algorithm in Algorithm::ALL {
            let a = AnyTrace::build(algorithm, &Sampler::new(seed).sample(algorithm, size)).unwrap();
            let b = AnyTrace::build(algorithm, &Sampler::new(seed).sample(algorithm, size)).unwrap();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn cursor_functions_stay_in_bounds(
        values in prop::collection::vec(-20i64..20, 2..30),
        index in 0usize..100,
    ) {
        let trace = sortedness::build(&values).unwrap();
        let last = trace.last_index();
        prop_assert!(seek(&trace, index) <= last);
        prop_assert!(next(&trace, index) <= last);
        prop_assert!(previous(&trace, index) <= last);
        prop_assert_eq!(next(&trace, last), last);
        prop_assert_eq!(previous(&trace, 0), 0);
    }
}
