//! The foreign `SumVec` from `libsumvec`.
//!
//! Only compiled with the `external` feature. The library must export
//! `double SumVec(double*, int)` with the C calling convention. `build.rs`
//! links it when `SUMVEC_LIB_DIR` is set; otherwise the symbol is left for
//! the host to provide at load time (R: `dyn.load("libsumvec.so", local = FALSE)`
//! before loading this library). A missing symbol fails at link or load time,
//! never here.

use std::os::raw::{c_double, c_int};

use super::Summable;

extern "C" {
    fn SumVec(vec: *const c_double, length: c_int) -> c_double;
}

/// Forward raw parts to the foreign routine untouched.
///
/// # Safety
/// `vec` must be valid for whatever the foreign routine reads given `length`.
pub unsafe fn sum_vec_raw(vec: *const f64, length: c_int) -> f64 {
    SumVec(vec, length)
}

/// Length as the C signature sees it. Anything above `c_int::MAX` is
/// clamped, which means the callee only sees a prefix.
fn c_length(len: usize) -> c_int {
    match c_int::try_from(len) {
        Ok(length) => length,
        Err(_) => {
            log::warn!(
                "SumVec: {} values exceed the C int range, only the first {} are summed",
                len,
                c_int::MAX
            );
            c_int::MAX
        }
    }
}

/// [`Summable`] over the foreign routine.
///
/// Inputs must be at most `c_int::MAX` long. Concurrent calls are only as
/// safe as the linked library is reentrant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExternalSumVec;

impl Summable for ExternalSumVec {
    fn sum(&self, values: &[f64]) -> f64 {
        debug_assert!(
            values.len() <= c_int::MAX as usize,
            "SumVec cannot take {} values",
            values.len()
        );
        unsafe { SumVec(values.as_ptr(), c_length(values.len())) }
    }
}
