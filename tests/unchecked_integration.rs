//! Integration tests for the error-normalization bridge

use std::error::Error;
use std::fs;
use std::io;

use driftwood::unchecked::{
    classify, get_unchecked, run_unchecked, unchecked_fn, UncheckedError,
};

fn missing_config_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "missing.conf not found")
}

#[test]
fn file_not_found_supplier_becomes_unchecked_io() {
    let result = get_unchecked(|| -> Result<String, io::Error> { Err(missing_config_error()) });

    match result {
        Err(UncheckedError::Io(cause)) => {
            assert_eq!(cause.kind(), io::ErrorKind::NotFound);
            assert_eq!(cause.to_string(), missing_config_error().to_string());
        }
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn real_filesystem_miss_lands_in_io_category() {
    let result = get_unchecked(|| fs::read("/definitely/not/here/driftwood.conf"));

    match result {
        Err(UncheckedError::Io(cause)) => assert_eq!(cause.kind(), io::ErrorKind::NotFound),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn successful_supplier_passes_value_through_unchanged() {
    let result = get_unchecked(|| Ok::<_, io::Error>("payload".to_string()));
    assert_eq!(result.unwrap(), "payload");
}

#[test]
fn successful_action_returns_normally() {
    assert!(run_unchecked(|| Ok::<(), io::Error>(())).is_ok());
}

#[test]
fn non_io_failure_is_generic_with_cause_preserved() {
    let result = get_unchecked(|| "twelve".parse::<u32>());

    let err = result.unwrap_err();
    assert_eq!(err.category(), "other");
    let cause = err.source().expect("generic failures carry their cause");
    assert_eq!(cause.to_string(), "twelve".parse::<u32>().unwrap_err().to_string());
}

#[test]
fn panicking_action_is_captured_not_propagated() {
    let result = run_unchecked(|| -> Result<(), io::Error> { panic!("wrecked") });

    match result {
        Err(UncheckedError::Panic(message)) => assert_eq!(message, "wrecked"),
        other => panic!("expected Panic, got {:?}", other),
    }
}

#[test]
fn classify_does_not_nest_normalized_errors() {
    let once = classify(missing_config_error());
    let twice = classify(classify(once));

    assert_eq!(twice.category(), "io");
    match twice {
        UncheckedError::Io(cause) => assert_eq!(cause.kind(), io::ErrorKind::NotFound),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn unchecked_fn_hosts_fallible_logic_in_map_pipelines() {
    let parse = unchecked_fn(|s: &str| s.parse::<i32>());

    let (ok, failed): (Vec<_>, Vec<_>) = ["1", "oops", "3"]
        .iter()
        .map(|s| parse(s))
        .partition(Result::is_ok);

    let values: Vec<i32> = ok.into_iter().map(Result::unwrap).collect();
    assert_eq!(values, vec![1, 3]);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].as_ref().unwrap_err().category(), "other");
}

#[test]
fn unchecked_fn_io_errors_keep_their_category() {
    let read = unchecked_fn(|path: &str| fs::read_to_string(path));

    let err = read("/nope/driftwood.lock").unwrap_err();
    assert_eq!(err.category(), "io");
}

#[test]
fn display_and_source_chain_reach_the_original() {
    let err = classify(missing_config_error());

    assert!(err.to_string().contains("missing.conf"));
    let original = err.source().expect("cause preserved");
    assert!(original.to_string().contains("missing.conf"));
}
