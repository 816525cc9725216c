//! C ABI layer.
//!
//! All functions are `#[no_mangle] extern "C"`. They handle null checks,
//! raw-to-slice conversion and holding the configured routine; the logic
//! lives in `binding` and `summation`.

pub mod config;
pub mod host;
pub mod integer;
pub mod logging;

// With `external` the symbol comes from libsumvec instead.
#[cfg(not(feature = "external"))]
pub mod sum_vec;

pub use config::{sb_configure, sb_reset_config};
pub use host::{sum_go, sum_go_direct, sum_go_with};
pub use integer::{Square, Sum};
pub use logging::sb_init_logging;

#[cfg(not(feature = "external"))]
pub use sum_vec::SumVec;
