//! Descriptive statistics over a non-empty slice of finite numbers.
//!
//! All three functions panic on an empty slice. Callers go through
//! [`crate::NumericSequence`], which cannot be empty.

use std::collections::HashMap;

/// Arithmetic mean.
///
/// Finite input always yields a finite mean. When the plain sum overflows,
/// each value is scaled by `1 / len` before summing, and the result is
/// clamped to the input's range to absorb rounding at the extremes.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mean of an empty sequence");
    let n = values.len() as f64;

    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return sum / n;
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|v| v / n).sum::<f64>().clamp(lo, hi)
}

/// Middle value of a sorted copy; the average of the two middle values
/// when the length is even.
pub fn median(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "median of an empty sequence");

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        midpoint(sorted[mid - 1], sorted[mid])
    }
}

/// Average of two finite values without overflowing near `f64::MAX`.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

struct Frequency {
    count: usize,
    first_index: usize,
}

/// Most frequent value. Ties go to the value that appears first in `values`.
pub fn mode(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mode of an empty sequence");

    let mut table: HashMap<u64, Frequency> = HashMap::new();
    for (index, &value) in values.iter().enumerate() {
        table
            .entry(frequency_key(value))
            .or_insert(Frequency { count: 0, first_index: index })
            .count += 1;
    }

    // (count, first_index) is unique per entry, so the winner does not
    // depend on map iteration order.
    let winner = table
        .values()
        .max_by(|a, b| {
            a.count
                .cmp(&b.count)
                .then_with(|| b.first_index.cmp(&a.first_index))
        })
        .map(|f| f.first_index)
        .unwrap_or(0);

    values[winner]
}

/// `-0.0` and `0.0` count as the same value.
fn frequency_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[7.0]), 7.0);
        assert_eq!(mean(&[-2.0, 2.0]), 0.0);
    }

    #[test]
    fn median_odd_uses_middle_of_sorted_copy() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&[42.0]), 42.0);
    }

    #[test]
    fn median_even_averages_middle_pair() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[2.0, 2.0]), 2.0);
    }

    #[test]
    fn median_does_not_overflow_near_max() {
        assert_eq!(median(&[1e308, 1e308]), 1e308);
        assert_eq!(median(&[f64::MAX, f64::MAX]), f64::MAX);
        assert_eq!(median(&[-f64::MAX, -f64::MAX, 0.0, 5.0]), -f64::MAX / 2.0);
    }

    #[test]
    fn mean_does_not_overflow_near_max() {
        assert_eq!(mean(&[1e308, 1e308]), 1e308);
        assert_eq!(mean(&[f64::MAX, f64::MAX, f64::MAX]), f64::MAX);
        assert!(mean(&[f64::MAX, 1e308, -1.0]).is_finite());
        assert!(mean(&[-f64::MAX, -f64::MAX, -1.0]).is_finite());
    }

    #[test]
    fn median_leaves_input_untouched() {
        let values = vec![9.0, -1.0, 4.0];
        median(&values);
        assert_eq!(values, vec![9.0, -1.0, 4.0]);
    }

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode(&[1.0, 3.0, 3.0, 2.0]), 3.0);
    }

    #[test]
    fn mode_tie_goes_to_first_occurrence() {
        assert_eq!(mode(&[2.0, 2.0, 3.0, 3.0, 1.0]), 2.0);
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), 1.0);
        assert_eq!(mode(&[3.0, 2.0, 2.0, 3.0]), 3.0);
    }

    #[test]
    fn mode_all_unique_returns_first() {
        assert_eq!(mode(&[8.0, 6.0, 7.0, 5.0]), 8.0);
    }

    #[test]
    fn mode_treats_signed_zeros_as_equal() {
        assert_eq!(mode(&[1.0, -0.0, 0.0]), -0.0);
    }

    #[test]
    #[should_panic(expected = "empty sequence")]
    fn empty_input_is_a_contract_violation() {
        median(&[]);
    }

    /// Moderate values mixed with anything finite, down to the extremes.
    fn finite_vec(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        let any_finite = prop::num::f64::POSITIVE
            | prop::num::f64::NEGATIVE
            | prop::num::f64::NORMAL
            | prop::num::f64::ZERO;
        let element = prop_oneof![
            -1.0e6f64..1.0e6,
            any_finite,
            Just(f64::MAX),
            Just(-f64::MAX),
        ];
        prop::collection::vec(element, 1..max_len)
    }

    fn small_int_vec(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec((0i32..6).prop_map(f64::from), 1..max_len)
    }

    proptest! {
        #[test]
        fn mean_is_finite_and_sum_over_len(data in finite_vec(100)) {
            let m = mean(&data);
            prop_assert!(m.is_finite(), "mean={} for {:?}", m, data);

            let sum = data.iter().sum::<f64>();
            if sum.is_finite() {
                prop_assert_eq!(m, sum / data.len() as f64);
            }
        }

        #[test]
        fn median_ignores_input_order(data in finite_vec(100)) {
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            prop_assert_eq!(median(&data), median(&sorted));
        }

        #[test]
        fn median_lies_between_extremes(data in finite_vec(100)) {
            let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let med = median(&data);
            prop_assert!(med.is_finite());
            prop_assert!(lo <= med && med <= hi, "median={} outside [{}, {}]", med, lo, hi);
        }

        #[test]
        fn mode_is_earliest_most_frequent(data in small_int_vec(50)) {
            let m = mode(&data);
            let count_of = |v: f64| data.iter().filter(|&&x| x == v).count();
            let best = data.iter().map(|&v| count_of(v)).max().unwrap();

            prop_assert_eq!(count_of(m), best);
            let first_max = data.iter().copied().find(|&v| count_of(v) == best).unwrap();
            prop_assert_eq!(m, first_max);
        }
    }
}
