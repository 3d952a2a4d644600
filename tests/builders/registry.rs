//! Algorithm registry and listings

use algotrace_builders::Algorithm;
use algotrace_builders::{brackets, palindrome, reverse, sortedness, spiral};
use algotrace_foundation::CodeMarker;

fn all_markers(algorithm: Algorithm) -> Vec<CodeMarker> {
    let collect = |markers: Vec<&[CodeMarker]>| -> Vec<CodeMarker> {
        markers.into_iter().flatten().copied().collect()
    };
    match algorithm {
        Algorithm::Sortedness => {
            let t = sortedness::build(&[1, 3, 2]).unwrap();
            collect(t.iter().map(|s| s.markers()).collect())
        }
        Algorithm::Palindrome => {
            let t = palindrome::build("abca").unwrap();
            collect(t.iter().map(|s| s.markers()).collect())
        }
        Algorithm::Reverse => {
            let t = reverse::build(&[1, 2, 3]).unwrap();
            collect(t.iter().map(|s| s.markers()).collect())
        }
        Algorithm::Spiral => {
            let t = spiral::build(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
            collect(t.iter().map(|s| s.markers()).collect())
        }
        Algorithm::Brackets => {
            let t = brackets::build("(x[)").unwrap();
            collect(t.iter().map(|s| s.markers()).collect())
        }
    }
}

#[test]
fn every_marker_points_at_a_listing_line() {
    for algorithm in Algorithm::ALL {
        for marker in all_markers(algorithm) {
            assert!(
                algorithm.source_line(marker).is_some(),
                "{algorithm}: {marker} does not resolve"
            );
        }
    }
}

#[test]
fn names_round_trip() {
    for algorithm in Algorithm::ALL {
        let parsed: Algorithm = algorithm.to_string().parse().unwrap();
        assert_eq!(parsed, algorithm);
        assert!(!algorithm.summary().is_empty());
    }
}
