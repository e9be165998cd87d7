//! Testing helpers.

use assert_float_eq::*;

use crate::probs::ProbabilityTable;

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

/// Asserts that every placing probability in `actual` is within `epsilon` of `expected`.
pub fn assert_table_absolute(expected: &ProbabilityTable, actual: &ProbabilityTable, epsilon: f64) {
    for ((camel, expected), (_, actual)) in expected.iter().zip(actual.iter()) {
        assert!(
            (expected.first - actual.first).abs() <= epsilon,
            "1st place for {camel}: expected {}, got {}",
            expected.first,
            actual.first
        );
        assert!(
            (expected.second - actual.second).abs() <= epsilon,
            "2nd place for {camel}: expected {}, got {}",
            expected.second,
            actual.second
        );
    }
}
