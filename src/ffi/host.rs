//! Entry points R calls.

use std::os::raw::c_int;

use super::config::with_configured;
use crate::binding::{sum_go as bind_sum_go, RNumericVector};

/// `.C("sum_go", as.double(x), length(x), double(1))`
///
/// R passes every argument by pointer; the sum is written to `result[0]`.
/// A null `result` is ignored.
///
/// # Safety
/// `x` must point to at least `*n` doubles and `result` to at least one.
#[no_mangle]
pub unsafe extern "C" fn sum_go(x: *const f64, n: *const c_int, result: *mut f64) {
    if result.is_null() {
        return;
    }
    let n = if n.is_null() { 0 } else { *n };
    *result = sum_go_direct(x, n);
}

/// By-value form for C glue that already unpacked the vector.
/// Safety: x must point to at least n doubles.
#[no_mangle]
pub unsafe extern "C" fn sum_go_direct(x: *const f64, n: c_int) -> f64 {
    if let Some(sum) = with_configured(|routine| {
        let x = RNumericVector::from_raw(x, n);
        bind_sum_go(routine, &x)
    }) {
        return sum;
    }
    forward(x, n)
}

#[cfg(not(feature = "external"))]
unsafe fn forward(x: *const f64, n: c_int) -> f64 {
    let x = RNumericVector::from_raw(x, n);
    bind_sum_go(&crate::summation::Accumulate, &x)
}

// Raw parts go to the foreign routine exactly as received.
#[cfg(feature = "external")]
unsafe fn forward(x: *const f64, n: c_int) -> f64 {
    log::trace!("sum_go_direct: {} values (external)", n);
    crate::summation::external::sum_vec_raw(x, n)
}

/// Like `sum_go` but with a caller-supplied routine instead of the configured one.
/// Safety: same pointer requirements as `sum_go`.
pub unsafe fn sum_go_with<S>(routine: &S, x: *const f64, n: *const c_int) -> f64
where
    S: crate::summation::Summable + ?Sized,
{
    let x = RNumericVector::from_dot_c(x, n);
    bind_sum_go(routine, &x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_dot_c_convention() {
        let x = [1.0, 2.0, 3.0];
        let n: c_int = 3;
        let mut result = [f64::NAN];
        unsafe { sum_go(x.as_ptr(), &n, result.as_mut_ptr()) };
        assert_eq!(result[0], 6.0);
    }

    #[test]
    fn test_direct() {
        let x = [-1.5, 1.5];
        assert_eq!(unsafe { sum_go_direct(x.as_ptr(), 2) }, 0.0);
        assert_eq!(unsafe { sum_go_direct(x.as_ptr(), 0) }, 0.0);
    }

    #[test]
    fn test_null_result_ignored() {
        let x = [1.0];
        let n: c_int = 1;
        unsafe { sum_go(x.as_ptr(), &n, ptr::null_mut()) };
    }

    #[test]
    fn test_with_injected_routine() {
        let x = [2.0, 4.0];
        let n: c_int = 2;
        let seen = unsafe { sum_go_with(&|v: &[f64]| v.len() as f64, x.as_ptr(), &n) };
        assert_eq!(seen, 2.0);
    }
}
