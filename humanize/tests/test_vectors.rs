//! Verify the formatters against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names an input, an optional decimal limit and the exact string
//! expected back.

use humanize::{comma, commaf};
use serde::Deserialize;

#[derive(Deserialize)]
struct Vectors {
    integers: Vec<IntCase>,
    floats: Vec<FloatCase>,
}

#[derive(Deserialize)]
struct IntCase {
    input: i64,
    expected: String,
}

#[derive(Deserialize)]
struct FloatCase {
    input: f64,
    decimals: Option<usize>,
    expected: String,
}

fn vectors() -> Vectors {
    let raw = include_str!("../test-vectors/comma.json");
    serde_json::from_str(raw).unwrap()
}

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

#[test]
fn integer_test_vectors() {
    for case in vectors().integers {
        assert_eq!(comma(case.input), case.expected, "comma({})", case.input);
    }
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

#[test]
fn float_test_vectors() {
    for case in vectors().floats {
        assert_eq!(
            commaf(case.input, case.decimals),
            case.expected,
            "commaf({}, {:?})",
            case.input,
            case.decimals
        );
    }
}

#[test]
fn float_grouping_matches_integer_grouping() {
    for v in [0_i64, 7, 999, 1000, 65_536, -4_294_967_296, 1_000_000_007] {
        assert_eq!(commaf(v as f64, None), comma(v), "value {v}");
    }
}
