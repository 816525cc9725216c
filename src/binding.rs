//! The host-facing binding: borrow the host's vector, hand it to a routine,
//! return the routine's answer untouched.
//!
//! Marshaling from the host's representation is kept behind [`HostVector`] so
//! that [`sum_go`] itself stays a single forwarding call.

use std::os::raw::c_int;

use crate::summation::{view, Summable};

/// A host-owned numeric vector that can lend its storage as `&[f64]`
/// without copying.
pub trait HostVector {
    fn as_view(&self) -> &[f64];
}

impl HostVector for [f64] {
    fn as_view(&self) -> &[f64] {
        self
    }
}

impl HostVector for Vec<f64> {
    fn as_view(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> HostVector for [f64; N] {
    fn as_view(&self) -> &[f64] {
        self
    }
}

/// An R numeric vector as it arrives through `.C()`: a `double*` to the
/// vector's data and an `int*` to its length.
#[derive(Clone, Copy, Debug)]
pub struct RNumericVector<'a> {
    values: &'a [f64],
}

impl<'a> RNumericVector<'a> {
    /// # Safety
    /// `x` must point to at least `*n` doubles that R keeps alive and
    /// unmodified for `'a`. A null `n` is read as length 0.
    pub unsafe fn from_dot_c(x: *const f64, n: *const c_int) -> Self {
        let len = if n.is_null() { 0 } else { *n };
        Self::from_raw(x, len)
    }

    /// # Safety
    /// `x` must point to at least `n` doubles valid for `'a`.
    pub unsafe fn from_raw(x: *const f64, n: c_int) -> Self {
        RNumericVector {
            values: view::from_raw(x, n),
        }
    }
}

impl HostVector for RNumericVector<'_> {
    fn as_view(&self) -> &[f64] {
        self.values
    }
}

/// Sum a host vector with `routine`, returning exactly what it returns.
pub fn sum_go<S, V>(routine: &S, x: &V) -> f64
where
    S: Summable + ?Sized,
    V: HostVector + ?Sized,
{
    let values = x.as_view();
    log::trace!("sum_go: {} values", values.len());
    routine.sum(values)
}
