//! Summation routines the binding forwards to.
//!
//! The binding never sums anything itself: it hands a borrowed view to
//! whatever implements [`Summable`]. The FFI layer in `ffi/` and the host
//! adapter in `binding` both go through this trait.

pub mod integer;
pub mod parallel;
pub mod sequential;
pub mod view;

#[cfg(feature = "external")]
pub mod external;

pub use integer::{square, sum_i32};
pub use parallel::ParallelSum;
pub use sequential::{sum_vec, Accumulate};

#[cfg(feature = "external")]
pub use external::ExternalSumVec;

/// A routine that reduces a borrowed run of doubles to one double.
///
/// Implementations must not retain the slice past the call. Calling one
/// concurrently is only sound when it is `Sync`.
pub trait Summable {
    fn sum(&self, values: &[f64]) -> f64;
}

impl<F> Summable for F
where
    F: Fn(&[f64]) -> f64,
{
    fn sum(&self, values: &[f64]) -> f64 {
        self(values)
    }
}
