//! 32-bit integer helpers that ship alongside `SumVec` in the companion
//! library. Arithmetic wraps like C `int` does in practice.

pub fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

pub fn sum_i32(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        assert_eq!(square(0), 0);
        assert_eq!(square(-7), 49);
        assert_eq!(square(46341), 46341i32.wrapping_mul(46341));
    }

    #[test]
    fn test_sum_i32() {
        assert_eq!(sum_i32(&[]), 0);
        assert_eq!(sum_i32(&[1, 2, 3, 4]), 10);
        assert_eq!(sum_i32(&[i32::MAX, 1]), i32::MIN);
    }
}
