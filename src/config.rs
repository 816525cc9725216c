//! Selecting which summation routine the host entry points use.
//!
//! The host picks a routine once through `sb_configure` (see `ffi::config`);
//! until then the entry points use the reference loop.

use std::os::raw::c_int;

use crate::error::{Result, SumError};
use crate::summation::{Accumulate, ParallelSum, Summable};

/// Default length above which [`Strategy::Parallel`] fans out.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Left-to-right loop on the calling thread.
    #[default]
    Sequential,
    /// Rayon pool, sequential below the threshold.
    Parallel,
    /// The linked `SumVec`.
    #[cfg(feature = "external")]
    External,
}

/// Codes as they cross the ABI: 0 sequential, 1 parallel, 2 external.
impl TryFrom<c_int> for Strategy {
    type Error = SumError;

    fn try_from(code: c_int) -> Result<Self> {
        match code {
            0 => Ok(Strategy::Sequential),
            1 => Ok(Strategy::Parallel),
            #[cfg(feature = "external")]
            2 => Ok(Strategy::External),
            other => Err(SumError::UnknownStrategy(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumConfig {
    pub strategy: Strategy,
    /// Pool size for [`Strategy::Parallel`]; 0 means one per CPU.
    pub num_threads: usize,
    pub parallel_threshold: usize,
}

impl Default for SumConfig {
    fn default() -> Self {
        SumConfig {
            strategy: Strategy::Sequential,
            num_threads: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SumConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the routine this configuration describes.
    pub fn build(&self) -> Result<Box<dyn Summable + Send + Sync>> {
        log::debug!("building summation routine: {:?}", self);
        Ok(match self.strategy {
            Strategy::Sequential => Box::new(Accumulate),
            Strategy::Parallel => Box::new(ParallelSum::new(
                self.num_threads,
                self.parallel_threshold,
            )?),
            #[cfg(feature = "external")]
            Strategy::External => Box::new(crate::summation::ExternalSumVec),
        })
    }
}
