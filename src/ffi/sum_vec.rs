//! The reference `SumVec`, exported under its C name so hosts that expect
//! the companion library can link this crate in its place.

use std::os::raw::c_int;

use crate::summation::{sum_vec, view};

/// `double SumVec(double* vec, int length)`
/// Returns 0 for a null vec or length <= 0.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SumVec(vec: *const f64, length: c_int) -> f64 {
    sum_vec(view::from_raw(vec, length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_sum_vec() {
        let v = [1.0, 2.0, 3.0];
        unsafe {
            assert_eq!(SumVec(v.as_ptr(), 3), 6.0);
            assert_eq!(SumVec(v.as_ptr(), 1), 1.0);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let v = [1.0];
        unsafe {
            assert_eq!(SumVec(ptr::null(), 5), 0.0);
            assert_eq!(SumVec(v.as_ptr(), 0), 0.0);
            assert_eq!(SumVec(v.as_ptr(), -3), 0.0);
        }
    }
}
