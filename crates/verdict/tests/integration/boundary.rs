//! Using the adapters at the edge of code that signals by panicking.

use verdict::{Outcome, catch_err_sync_if, make_when};

use crate::common::{RangeError, init_tracing, raised};

/// A foreign routine that reports bad input by panicking with a typed value.
fn checked_sqrt(value: i64) -> f64 {
    if value < 0 {
        verdict::raise(RangeError { value })
    }
    (value as f64).sqrt()
}

fn sqrt_outcome(value: i64) -> Outcome<f64, RangeError> {
    catch_err_sync_if(|| checked_sqrt(value), |e| e.is::<RangeError>())
        .map(|produced| produced.value)
        .map_err(|intercepted| {
            intercepted
                .caught
                .downcast::<RangeError>()
                .map(|boxed| *boxed)
                .unwrap_or(RangeError { value })
        })
}

#[derive(Debug, PartialEq)]
enum Failure {
    Range(i64),
}

fn sum_of_roots(values: &[i64]) -> Result<f64, Failure> {
    let mut total = 0.0;
    for value in values {
        total += sqrt_outcome(*value)
            .into_result()
            .map_err(|e| Failure::Range(e.value))?;
    }
    Ok(total)
}

#[test]
fn test_boundary_success() {
    assert_eq!(sqrt_outcome(16), Outcome::Ok(4.0));
}

#[test]
fn test_boundary_modeled_failure() {
    init_tracing();
    assert_eq!(sqrt_outcome(-4), Outcome::Err(RangeError { value: -4 }));
}

#[test]
fn test_boundary_feeds_question_mark() {
    init_tracing();
    assert_eq!(sum_of_roots(&[1, 4, 9]), Ok(6.0));
    assert_eq!(sum_of_roots(&[1, -2, 9]), Err(Failure::Range(-2)));
}

#[test]
fn test_boundary_does_not_mask_unrelated_panics() {
    init_tracing();
    let payload = raised(|| {
        catch_err_sync_if(
            || -> u8 { verdict::raise("index out of bounds") },
            |e| e.is::<RangeError>(),
        )
    });
    assert_eq!(verdict::describe(&*payload), "index out of bounds");
}

#[test]
fn test_boundary_validation_roundtrip() {
    let outcome = make_when("abc".len() == 3, "abc");
    assert_eq!(outcome.unwrap(), "abc");
}
