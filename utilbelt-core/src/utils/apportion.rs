//! Largest-Remainder Apportionment.
//!
//! Distributes an integer total across a sequence of fractional shares. Every
//! share first receives its truncated value; the units still missing from the
//! desired total are then handed out, one each, to the shares with the largest
//! fractional remainders.
//!
//! # Policy
//!
//! - Missing, NaN and infinite shares contribute `0`.
//! - When the truncated values already add up to the desired total, or add up
//!   to zero, no redistribution happens and the truncated values are returned.
//! - Only a positive shortfall is redistributed. If the truncated values already
//!   exceed the desired total, nothing is taken away and the output sum stays
//!   above the target.
//! - A shortfall larger than the number of shares is clamped: each share gains
//!   at most one unit, and the output falls short of the target by the rest.
//! - Equal remainders are resolved by input position (earlier wins); NaN
//!   remainders rank after every number.
//!
//! # Examples
//!
//! ```
//! use utilbelt_core::utils::apportion::apportion;
//!
//! // Percentages that must add up to 100.
//! let shares = apportion(&[33.3, 33.3, 33.4], 100);
//! assert_eq!(shares.iter().sum::<i64>(), 100);
//! assert_eq!(shares.len(), 3);
//! ```

use std::cmp::Ordering;

/// Per-element working state, discarded once the call returns.
#[derive(Debug, Clone, Copy)]
struct Share {
    integer: i64,
    decimal: f64,
    original_index: usize,
}

impl Share {
    fn new(value: Option<f64>, original_index: usize) -> Self {
        let raw = value.unwrap_or(f64::NAN);
        // Missing, NaN and infinite values contribute nothing.
        let integer = if raw.is_finite() { raw.trunc() as i64 } else { 0 };
        Self {
            integer,
            decimal: raw % 1.0,
            original_index,
        }
    }
}

fn by_remainder_desc(a: &Share, b: &Share) -> Ordering {
    let by_decimal = match (a.decimal.is_nan(), b.decimal.is_nan()) {
        (false, false) => b.decimal.partial_cmp(&a.decimal).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_decimal.then(a.original_index.cmp(&b.original_index))
}

fn apportion_shares<I>(values: I, desired_sum: i64) -> Vec<i64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum: i64 = 0;
    let mut shares: Vec<Share> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let share = Share::new(value, index);
            sum = sum.saturating_add(share.integer);
            share
        })
        .collect();

    if sum != desired_sum && sum != 0 {
        shares.sort_by(by_remainder_desc);

        let diff = desired_sum.saturating_sub(sum);
        if diff > 0 {
            let wanted = usize::try_from(diff).unwrap_or(usize::MAX);
            if wanted > shares.len() {
                tracing::debug!(
                    shortfall = diff,
                    shares = shares.len(),
                    "apportionment shortfall exceeds share count; clamping"
                );
            }
            for share in shares.iter_mut().take(wanted) {
                share.integer += 1;
            }
        }

        shares.sort_by_key(|share| share.original_index);
    }

    shares.into_iter().map(|share| share.integer).collect()
}

/// Apportions `desired_sum` across `values` using the largest-remainder method.
///
/// Returns one integer per input value, in input order. See the module
/// documentation for how ties, NaN values, surpluses and oversized shortfalls
/// are handled. This function never fails.
///
/// # Examples
///
/// ```
/// use utilbelt_core::utils::apportion::apportion;
///
/// assert_eq!(apportion(&[1.1, 1.9, 1.5, 1.7], 6), vec![1, 2, 1, 2]);
/// assert_eq!(apportion(&[5.0, 5.0], 10), vec![5, 5]);
/// assert_eq!(apportion(&[0.0, 0.0], 5), vec![0, 0]);
/// ```
pub fn apportion(values: &[f64], desired_sum: i64) -> Vec<i64> {
    apportion_shares(values.iter().copied().map(Some), desired_sum)
}

/// Same as [`apportion`], for inputs that may contain missing entries.
///
/// A `None` entry contributes `0` and its remainder ranks last.
pub fn apportion_optional(values: &[Option<f64>], desired_sum: i64) -> Vec<i64> {
    apportion_shares(values.iter().copied(), desired_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apportion_reaches_desired_sum() {
        let result = apportion(&[1.4, 2.4, 2.2], 6);
        assert_eq!(result.iter().sum::<i64>(), 6);

        let truncated = [1, 2, 2];
        let incremented = result
            .iter()
            .zip(truncated.iter())
            .filter(|(got, base)| *got - *base == 1)
            .count();
        assert_eq!(incremented, 1);
    }

    #[test]
    fn test_apportion_empty_input() {
        assert_eq!(apportion(&[], 0), Vec::<i64>::new());
        assert_eq!(apportion(&[], 7), Vec::<i64>::new());
    }

    #[test]
    fn test_apportion_sum_already_matches() {
        assert_eq!(apportion(&[5.0, 5.0], 10), vec![5, 5]);
        // Truncated sum matches, so remainders are dropped rather than rounded.
        assert_eq!(apportion(&[2.9, 3.9], 5), vec![2, 3]);
    }

    #[test]
    fn test_apportion_zero_sum_skips_redistribution() {
        assert_eq!(apportion(&[0.0, 0.0], 5), vec![0, 0]);
        assert_eq!(apportion(&[0.4, 0.6], 1), vec![0, 0]);
    }

    #[test]
    fn test_apportion_preserves_input_order() {
        assert_eq!(apportion(&[1.1, 1.9, 1.5, 1.7], 6), vec![1, 2, 1, 2]);
        assert_eq!(apportion(&[1.7, 1.5, 1.9, 1.1], 6), vec![2, 1, 2, 1]);
    }

    #[test]
    fn test_apportion_ties_favor_earlier_position() {
        assert_eq!(apportion(&[1.5, 2.5, 3.25], 7), vec![2, 2, 3]);
        assert_eq!(apportion(&[3.25, 1.5, 2.5], 7), vec![3, 2, 2]);
    }

    #[test]
    fn test_apportion_surplus_is_not_removed() {
        assert_eq!(apportion(&[5.5, 5.5], 8), vec![5, 5]);
    }

    #[test]
    fn test_apportion_clamps_oversized_shortfall() {
        let result = apportion(&[1.2, 1.3], 10);
        assert_eq!(result, vec![2, 2]);
        assert_eq!(result.iter().sum::<i64>(), 4);
    }

    #[test]
    fn test_apportion_negative_values() {
        // -1.5 truncates to -1 with a remainder of -0.5, which ranks below 0.7.
        assert_eq!(apportion(&[-1.5, 3.7], 3), vec![-1, 4]);
    }

    #[test]
    fn test_apportion_nan_contributes_zero_and_ranks_last() {
        assert_eq!(apportion(&[f64::NAN, 1.5], 2), vec![0, 2]);
        assert_eq!(apportion(&[1.0, f64::NAN, 2.0], 4), vec![2, 0, 2]);
    }

    #[test]
    fn test_apportion_infinities_contribute_zero() {
        assert_eq!(apportion(&[f64::INFINITY, 1.5], 2), vec![0, 2]);
        assert_eq!(apportion(&[f64::NEG_INFINITY, 2.5, 3.5], 7), vec![0, 3, 4]);
        // Infinite values have a NaN remainder and are served after finite ones.
        assert_eq!(apportion(&[f64::INFINITY, 1.5, 2.25], 4), vec![0, 2, 2]);
    }

    #[test]
    fn test_apportion_optional_missing_entries() {
        assert_eq!(apportion_optional(&[None, Some(2.6), Some(1.2)], 4), vec![0, 3, 1]);
        assert_eq!(apportion_optional(&[None, None], 3), vec![0, 0]);
    }

    #[test]
    fn test_apportion_length_always_matches() {
        for desired in [-5, 0, 1, 3, 100] {
            assert_eq!(apportion(&[0.5, 1.5, 2.5, 3.5], desired).len(), 4);
        }
    }
}
