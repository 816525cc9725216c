//! Error type for the fallible operations around the binding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SumError {
    #[error("null data pointer with length {len}")]
    NullPointer { len: usize },

    #[error("negative vector length: {0}")]
    NegativeLength(i32),

    #[error("unknown summation strategy code: {0}")]
    UnknownStrategy(i32),

    #[error("could not build summation thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SumError>;
