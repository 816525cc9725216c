//! Left-to-right accumulation, the reference `SumVec` behaviour.

use super::Summable;

/// Sum `values` with one accumulator starting at `0.0`.
///
/// No compensation: NaN propagates and `inf + -inf` is NaN.
pub fn sum_vec(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &v in values {
        sum += v;
    }
    sum
}

/// Stateless [`Summable`] over [`sum_vec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Accumulate;

impl Summable for Accumulate {
    fn sum(&self, values: &[f64]) -> f64 {
        sum_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_basic() {
        assert_eq!(sum_vec(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum_vec(&[-1.5, 1.5]), 0.0);
        assert_eq!(Accumulate.sum(&[0.25, 0.25]), 0.5);
    }

    #[test]
    fn test_sum_empty() {
        let s = sum_vec(&[]);
        assert_eq!(s, 0.0);
        assert!(s.is_sign_positive());
    }

    #[test]
    fn test_non_finite() {
        assert!(sum_vec(&[1.0, f64::NAN, 2.0]).is_nan());
        assert!(sum_vec(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
        assert_eq!(sum_vec(&[f64::INFINITY, 1.0]), f64::INFINITY);
    }

    #[test]
    fn test_left_to_right_order() {
        // (1e16 + 1.0) rounds back to 1e16, so order is observable.
        assert_eq!(sum_vec(&[1e16, 1.0, -1e16]), 0.0);
        assert_eq!(sum_vec(&[1e16, -1e16, 1.0]), 1.0);
    }
}
