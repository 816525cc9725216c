//! Rayon-backed summation for long vectors.
//!
//! Short inputs fall through to the sequential loop so small host calls never
//! pay for a pool dispatch. Above the threshold the association order follows
//! rayon's split tree, so non-integral data may differ from [`sum_vec`] in the
//! last bits.

use rayon::prelude::*;

use super::sequential::sum_vec;
use super::Summable;
use crate::error::Result;

pub struct ParallelSum {
    pub thread_pool: rayon::ThreadPool,
    /// Inputs shorter than this are summed on the calling thread.
    pub threshold: usize,
}

impl ParallelSum {
    /// Create a routine backed by its own pool. `num_threads == 0` lets rayon
    /// pick from the number of CPUs.
    pub fn new(num_threads: usize, threshold: usize) -> Result<Self> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("sum-bridge-{i}"))
            .build()?;
        log::debug!(
            "parallel summation pool: {} threads, threshold {}",
            thread_pool.current_num_threads(),
            threshold
        );
        Ok(ParallelSum {
            thread_pool,
            threshold,
        })
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }
}

impl Summable for ParallelSum {
    fn sum(&self, values: &[f64]) -> f64 {
        if values.len() < self.threshold {
            return sum_vec(values);
        }
        // Identity is +0.0 like the sequential accumulator; `Sum for f64`
        // starts from -0.0.
        self.thread_pool.install(|| {
            values
                .par_iter()
                .fold(|| 0.0, |acc, &v| acc + v)
                .reduce(|| 0.0, |a, b| a + b)
        })
    }
}
