//! Saving and loading traces

use algotrace_builders::Algorithm;
use algotrace_runtime::{AnyTrace, Sampler, from_bytes, load_from_file, save_to_file, to_bytes};

#[test]
fn every_algorithm_survives_a_roundtrip() {
    let mut sampler = Sampler::new(11);
    for algorithm in Algorithm::ALL {
        let trace = AnyTrace::build(algorithm, &sampler.sample(algorithm, 4)).unwrap();
        let loaded = from_bytes(&to_bytes(&trace).unwrap()).unwrap();
        assert_eq!(loaded, trace, "{algorithm}");
    }
}

#[test]
fn file_roundtrip() {
    let trace = AnyTrace::build(
        Algorithm::Reverse,
        &Sampler::new(5).sample(Algorithm::Reverse, 6),
    )
    .unwrap();
    let path = std::env::temp_dir().join(format!(
        "algotrace-persistence-{}.msgpack",
        std::process::id()
    ));

    save_to_file(&trace, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, trace);
}

#[test]
fn truncated_bytes_are_rejected() {
    let trace = AnyTrace::build(
        Algorithm::Sortedness,
        &Sampler::new(1).sample(Algorithm::Sortedness, 4),
    )
    .unwrap();
    let bytes = to_bytes(&trace).unwrap();
    assert!(from_bytes(&bytes[..bytes.len() / 2]).is_err());
}
