//! Routine selection over the ABI.

use std::os::raw::c_int;
use std::sync::{PoisonError, RwLock};

use crate::config::{Strategy, SumConfig};
use crate::summation::Summable;

type Routine = Box<dyn Summable + Send + Sync>;

/// Routine installed by `sb_configure`, None until then.
static ROUTINE: RwLock<Option<Routine>> = RwLock::new(None);

/// Run `f` with the installed routine, or return None if the host never
/// configured one.
pub(crate) fn with_configured<T>(
    f: impl FnOnce(&(dyn Summable + Send + Sync)) -> T,
) -> Option<T> {
    let guard = ROUTINE.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_deref().map(|routine| f(routine))
}

/// Select the routine `sum_go` and `sum_go_direct` use from now on.
/// `strategy`: 0 sequential, 1 parallel, 2 external (only with that feature).
/// `num_threads` 0 means one per CPU; `threshold` is the length below which
/// the parallel routine stays on the calling thread.
/// Returns 0 on success, 1 for an unknown strategy, 2 if the pool could not be built.
#[no_mangle]
pub extern "C" fn sb_configure(strategy: c_int, num_threads: u32, threshold: u64) -> c_int {
    let strategy = match Strategy::try_from(strategy) {
        Ok(strategy) => strategy,
        Err(e) => {
            log::warn!("sb_configure: {e}");
            return 1;
        }
    };
    let config = SumConfig::default()
        .with_strategy(strategy)
        .with_num_threads(num_threads as usize)
        .with_parallel_threshold(usize::try_from(threshold).unwrap_or(usize::MAX));
    match config.build() {
        Ok(routine) => {
            *ROUTINE.write().unwrap_or_else(PoisonError::into_inner) = Some(routine);
            0
        }
        Err(e) => {
            log::warn!("sb_configure: {e}");
            2
        }
    }
}

/// Drop the installed routine and go back to the default.
#[no_mangle]
pub extern "C" fn sb_reset_config() {
    *ROUTINE.write().unwrap_or_else(PoisonError::into_inner) = None;
}
