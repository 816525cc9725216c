//! sum-bridge - numeric vector summation for R
//!
//! Exposes a `SumVec` routine to R through a C ABI. The binding borrows the
//! host's vector, forwards it to a [`summation::Summable`] routine and returns
//! its result unchanged.

pub mod binding;
pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod summation;

pub use binding::{sum_go, HostVector, RNumericVector};
pub use config::{Strategy, SumConfig};
pub use error::{Result, SumError};
pub use summation::{Accumulate, ParallelSum, Summable};
